pub mod auth;
pub mod session;
pub mod time_clock;
