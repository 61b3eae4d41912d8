//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout (development)
//!     → append-mode log file (operational records)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; request IDs correlate log lines
//! - Log level from `RUST_LOG` when set, else from configuration
//! - A log file that cannot be opened fails startup

pub mod logging;
