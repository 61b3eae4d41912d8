//! Movie Gateway
//!
//! A small HTTP façade that forwards movie search and lookup requests to an
//! external movie-database API and streams the upstream response back to the
//! caller.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                MOVIE GATEWAY                 │
//!                    │                                              │
//!   Client Request   │  ┌─────────┐    ┌─────────────┐             │
//!   ─────────────────┼─▶│  http   │───▶│ passthrough │             │
//!                    │  │ server  │    │  handlers   │             │
//!                    │  └─────────┘    └──────┬──────┘             │
//!                    │                        │                    │
//!                    │                        ▼                    │
//!   Client Response  │  ┌─────────┐    ┌─────────────┐             │
//!   ◀────────────────┼──│ stream  │◀───│  upstream   │◀────────────┼── Movie DB API
//!                    │  │  relay  │    │   client    │             │
//!                    │  └─────────┘    └─────────────┘             │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns         │ │
//!                    │  │ ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                    │  │ │ config │ │observability│ │lifecycle│ │ │
//!                    │  │ └────────┘ └─────────────┘ └─────────┘ │ │
//!                    │  └────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::Settings;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
