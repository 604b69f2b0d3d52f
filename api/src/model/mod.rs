pub mod admin;
pub mod auth;
pub mod export;
pub mod feedback;
pub mod guest;
pub mod hostel;
pub mod user;
