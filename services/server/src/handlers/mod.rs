pub mod attendance;
pub mod auth;
pub mod notification;
pub mod office;
pub mod user;
