pub mod auth;
pub mod post;
pub mod search;
pub mod user;
