//! Paginated export of a composed recipe.
//!
//! Layout is decided here; drawing glyphs is left to a [`Canvas`] backend.

mod canvas;
mod layout;
mod paginator;
mod pdf;

pub use canvas::{Canvas, TextCanvas};
pub use layout::PageLayout;
pub use paginator::{paginate, prepare_lines, Document, Page, PlacedLine};
pub use pdf::PdfCanvas;

use log::info;
use std::io::Cursor;

use crate::model::Recipe;

/// A finished, paginated document
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Suggested file name, derived from the recipe title
    pub file_name: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Reader positioned at the start of the document
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }
}

/// Title with spaces replaced by underscores, plus `extension`
pub fn suggested_file_name(title: &str, extension: &str) -> String {
    let title = title.trim();
    let stem = if title.is_empty() { "recipe" } else { title };
    format!("{}.{}", stem.replace(' ', "_"), extension)
}

/// Lay out `recipe` and draw it onto `canvas`
pub fn export_recipe<C: Canvas>(
    recipe: &Recipe,
    layout: &PageLayout,
    mut canvas: C,
) -> Result<ExportedDocument, C::Error> {
    let lines = prepare_lines(&recipe.to_markdown());
    let document = paginate(&lines, layout);
    document.render(&mut canvas)?;

    let file_name = suggested_file_name(&recipe.title, canvas.extension());
    let page_count = document.pages.len();
    let bytes = canvas.finish()?;

    info!("Exported '{}' ({} page(s))", file_name, page_count);

    Ok(ExportedDocument {
        file_name,
        page_count,
        bytes,
    })
}
