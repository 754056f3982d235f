use std::convert::Infallible;

/// Drawing backend for paginated documents
pub trait Canvas {
    type Error: std::error::Error;

    /// File extension of the produced document, without the dot
    fn extension(&self) -> &str;

    fn draw_text(&mut self, x: f64, y: f64, text: &str) -> Result<(), Self::Error>;

    /// Close the current page and open a fresh one
    fn finish_page(&mut self) -> Result<(), Self::Error>;

    /// Consume the canvas and return the finished document
    fn finish(self) -> Result<Vec<u8>, Self::Error>;
}

/// Plain-text backend: one text line per drawn line, pages separated by a
/// form feed.
#[derive(Debug, Default)]
pub struct TextCanvas {
    pages: Vec<String>,
    current: Vec<String>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for TextCanvas {
    type Error = Infallible;

    fn extension(&self) -> &str {
        "txt"
    }

    fn draw_text(&mut self, _x: f64, _y: f64, text: &str) -> Result<(), Self::Error> {
        self.current.push(text.to_string());
        Ok(())
    }

    fn finish_page(&mut self) -> Result<(), Self::Error> {
        let lines = std::mem::take(&mut self.current);
        self.pages.push(lines.join("\n"));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, Self::Error> {
        if !self.current.is_empty() {
            self.finish_page()?;
        }
        Ok(self.pages.join("\n\u{c}\n").into_bytes())
    }
}
