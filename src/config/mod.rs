//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional) + process environment
//!     → loader.rs (read & validate)
//!     → Settings (validated, immutable)
//!     → shared via Arc to server and handlers
//! ```
//!
//! # Design Decisions
//! - Settings are read once at startup; handlers never touch the
//!   environment. A bad or missing variable fails the process before it
//!   accepts traffic, not in the middle of a request.
//! - All sections have defaults; only the upstream base URL and API key
//!   are required.
//! - The API key is read from `OMDBKey`, falling back to `OMDBKEY`.

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::Settings;
pub use schema::TimeoutConfig;
pub use schema::UpstreamConfig;
