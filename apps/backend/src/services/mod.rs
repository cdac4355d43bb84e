pub mod auth;
pub mod results;
pub mod sessions;
