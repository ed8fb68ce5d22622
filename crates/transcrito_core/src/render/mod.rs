//! Format rendering.
//!
//! # Responsibility
//! - Map `(results, config, book name)` onto the three output shapes: screen
//!   tree, flat text and paginated document.
//!
//! # Invariants
//! - Every renderer is a pure function of its inputs.
//! - All shapes share one chapter/verse traversal (`traversal`).

pub mod document;
pub mod markers;
pub mod text;
pub mod traversal;
pub mod tree;

use crate::layout::paginator::{paginate, PageSetup, PaginatedDocument};
use crate::model::config::DisplayConfig;
use crate::model::verse::TranslationResult;
use document::{build_document, DocumentModel};
use serde::Serialize;
use text::render_text;
use tree::{render_tree, ScreenTree};

/// Output shape requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputShape<'s> {
    Screen,
    /// Flat text with the given block separator.
    Text { separator: &'s str },
    /// Declarative document model only.
    DocumentModel,
    /// Document model placed on pages by the cursor engine.
    Paginated(PageSetup),
}

/// Tagged union of every rendered shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "output", rename_all = "snake_case")]
pub enum RenderOutput {
    Screen(ScreenTree),
    Text(String),
    DocumentModel(DocumentModel),
    Paginated(PaginatedDocument),
}

/// Renders `results` into the requested shape.
pub fn render(
    results: &[TranslationResult],
    config: &DisplayConfig,
    book_name: &str,
    shape: OutputShape<'_>,
) -> RenderOutput {
    match shape {
        OutputShape::Screen => RenderOutput::Screen(render_tree(results, config, book_name)),
        OutputShape::Text { separator } => {
            RenderOutput::Text(render_text(results, config, book_name, separator))
        }
        OutputShape::DocumentModel => {
            RenderOutput::DocumentModel(build_document(results, config, book_name))
        }
        OutputShape::Paginated(setup) => {
            let model = build_document(results, config, book_name);
            RenderOutput::Paginated(paginate(&model, setup))
        }
    }
}
