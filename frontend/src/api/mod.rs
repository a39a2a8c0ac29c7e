mod admin;
mod auth;
mod breaks;
pub mod client;
pub mod compat;
mod hours;
pub mod reports;
mod schedules;
mod time_entries;
pub mod types;

pub use client::*;
pub use reports::ReportPeriod;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
