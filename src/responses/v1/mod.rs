pub mod auth;
pub mod post;
pub mod user;
