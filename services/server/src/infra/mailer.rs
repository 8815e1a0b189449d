use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::domain::repository::Mailer;
use crate::error::ServiceError;

/// SMTP-backed 2FA code delivery. Failures map to `Delivery`, never to a
/// credential error — the stored code is unaffected either way.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        from: &str,
    ) -> anyhow::Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?.port(port);
        if let (Some(user), Some(pass)) = (username, password) {
            builder = builder.credentials(Credentials::new(user.to_owned(), pass.to_owned()));
        }
        Ok(Self {
            transport: builder.build(),
            from: from.to_owned(),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ServiceError> {
        let email = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| ServiceError::Delivery(anyhow::Error::new(e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| ServiceError::Delivery(anyhow::Error::new(e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_owned())
            .map_err(|e| ServiceError::Delivery(e.into()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| ServiceError::Delivery(e.into()))?;
        Ok(())
    }
}
