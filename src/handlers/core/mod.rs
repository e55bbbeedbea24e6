//! Core handler infrastructure.
//!
//! This module contains the fundamental types for the command handler
//! system: the handler trait, the per-command context, and the registry
//! that maps command names to handlers.

pub mod context;
pub mod registry;

pub use context::{Context, Handler, HandlerError, HandlerResult, Sink};
pub use registry::Registry;
