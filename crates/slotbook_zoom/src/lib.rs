// --- File: crates/slotbook_zoom/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod client;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;

// Re-export for main backend
pub use auth::TokenIssuer;
pub use client::ZoomClient;
pub use error::ZoomError;
pub use handlers::ZoomState;
pub use models::{CreateMeetingRequest, Meeting};
pub use routes::routes;
