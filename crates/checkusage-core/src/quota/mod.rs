//! ADrive quota API access
//!
//! The client performs the authenticated pool-discovery → login →
//! usage-fetch → logout sequence and yields a [`UsageSnapshot`] for
//! the threshold evaluator.

mod client;
mod session;
mod types;

pub use client::AdriveClient;
pub use session::Session;
pub use types::{parse_capacity, Credentials, UsageSnapshot};
