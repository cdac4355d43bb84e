pub mod auth;
pub mod lists;
pub mod study;
pub mod users;
