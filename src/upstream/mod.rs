//! Upstream client subsystem.
//!
//! # Data Flow
//! ```text
//! handler builds query URL (config::UpstreamConfig)
//!     → client.rs (single GET, no retry)
//!     → reqwest::Response (status, headers, open byte stream)
//!     → handler relays or converts to a status code
//! ```
//!
//! # Design Decisions
//! - One attempt per request; the handler maps any failure to 503.
//! - The response body is a live stream; whoever holds the
//!   `reqwest::Response` owns the connection, and dropping it closes the
//!   stream exactly once on every exit path.
//! - No timeout is configured on the outbound call. The inbound request
//!   deadline is the only bound on a stalled upstream.

pub mod client;

pub use client::UpstreamClient;
pub use client::UpstreamError;
