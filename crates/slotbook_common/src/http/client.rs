// --- File: crates/slotbook_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!("slotbook/", env!("CARGO_PKG_VERSION"));

/// Creates an HTTP client for talking to an upstream API.
///
/// # Arguments
///
/// * `timeout` - Total time allowed for one request, connect through body
///
/// # Returns
///
/// A reqwest::Client meant to be built once and shared; it pools connections internally.
pub fn create_client(timeout: Duration) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
