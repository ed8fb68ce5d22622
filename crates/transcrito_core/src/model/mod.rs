//! Passage domain model.
//!
//! # Responsibility
//! - Define corpus, reference, verse and configuration values used by the
//!   resolve-and-render pipeline.
//!
//! # Invariants
//! - The corpus is read-only once loaded.
//! - References, results and configs are plain values created per cycle.

pub mod book_catalog;
pub mod config;
pub mod corpus;
pub mod reference;
pub mod selection;
pub mod verse;
