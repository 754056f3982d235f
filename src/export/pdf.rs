use printpdf::{
    BuiltinFont, Error, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Pt,
};

use super::{Canvas, PageLayout};

const FONT_SIZE: f32 = 12.0;
const LAYER_NAME: &str = "Text";

/// PDF backend: built-in Times-Roman at 12 pt, coordinates in points from
/// the bottom-left corner.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    layer: PdfLayerReference,
    width: Mm,
    height: Mm,
    // The document opens with one page; later pages are added when something
    // is drawn on them or when another page is finished after them.
    page_finished: bool,
}

impl PdfCanvas {
    /// Open a document titled `title` with the page size of `layout`
    pub fn new(title: &str, layout: &PageLayout) -> Result<Self, Error> {
        let width = points(layout.page_width);
        let height = points(layout.page_height);

        let (doc, page, layer) = PdfDocument::new(title, width, height, LAYER_NAME);
        let font = doc.add_builtin_font(BuiltinFont::TimesRoman)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(PdfCanvas {
            doc,
            font,
            layer,
            width,
            height,
            page_finished: false,
        })
    }

    fn open_page(&mut self) {
        let (page, layer) = self.doc.add_page(self.width, self.height, LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
    }
}

fn points(value: f64) -> Mm {
    Mm::from(Pt(value as f32))
}

impl Canvas for PdfCanvas {
    type Error = Error;

    fn extension(&self) -> &str {
        "pdf"
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), Self::Error> {
        if self.page_finished {
            self.open_page();
            self.page_finished = false;
        }
        self.layer
            .use_text(text, FONT_SIZE, points(x), points(y), &self.font);
        Ok(())
    }

    fn finish_page(&mut self) -> Result<(), Self::Error> {
        if self.page_finished {
            // previous page was finished without drawing on this one
            self.open_page();
        }
        self.page_finished = true;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, Self::Error> {
        self.doc.save_to_bytes()
    }
}
