//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Init logging → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT/SIGTERM (signals.rs)
//!         → Shutdown::trigger (shutdown.rs)
//!         → server stops accepting, drains in-flight requests
//!         → forced exit after the drain deadline
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then logging, listener last
//! - Shutdown has a deadline: forced exit after `timeouts.drain_secs`

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
