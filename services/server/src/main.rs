use sea_orm::Database;
use tracing::info;

use smartattend_core::tracing::init_tracing;

use smartattend_server::config::AppConfig;
use smartattend_server::infra::mailer::SmtpMailer;
use smartattend_server::router::build_router;
use smartattend_server::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::new(
        &config.smtp_host,
        config.smtp_port,
        config.smtp_username.as_deref(),
        config.smtp_password.as_deref(),
        &config.mail_from,
    )
    .expect("invalid SMTP configuration");

    let state = AppState { db, mailer };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("attendance server listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
