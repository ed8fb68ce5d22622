//! Pagination engine for the document sink.
//!
//! # Responsibility
//! - Wrap block text to a fixed content width.
//! - Track a vertical cursor and insert page breaks.
//! - Write placed pages out as PDF.
//!
//! # See also
//! - `crate::render::document` for the declarative block model consumed here.

pub mod paginator;
pub mod pdf;
pub mod wrap;
