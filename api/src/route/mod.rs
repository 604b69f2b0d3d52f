pub mod admin;
pub mod auth;
pub mod feedback;
pub mod health;
pub mod v1;
