pub mod clock;
pub mod credential;
pub mod geo;
pub mod repository;
pub mod types;
