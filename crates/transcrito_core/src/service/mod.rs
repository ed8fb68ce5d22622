//! Core use-case services.
//!
//! # Responsibility
//! - Resolve verse ranges per book and aggregate them per translation.
//! - Own the per-session display state and drive the renderers.
//!
//! # See also
//! - `crate::render` for the output shapes.

pub mod passage_service;
pub mod range_resolver;
pub mod session;
