//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger / free functions produce:
//!     → metrics.rs (message counters per severity)
//! TracingSink produces:
//!     → tracing events, collected by the subscriber from logging.rs
//!
//! Consumers:
//!     → stdout (pretty, compact or JSON)
//!     → any installed `metrics` recorder
//! ```
//!
//! # Design Decisions
//! - Subscriber installation is opt-in; a library never installs one itself
//! - Counters go through the `metrics` facade and cost nothing without a recorder

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, InitError};
