use serde::Deserialize;

/// Fixed page geometry, in points. Defaults describe a US-letter page set in
/// 12 pt type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Horizontal start of every line
    pub left_margin: f64,
    /// Distance from the top edge to the first baseline
    pub top_margin: f64,
    /// A page is flushed once the cursor drops below this height
    pub bottom_margin: f64,
    pub line_height: f64,
    /// Lines longer than this many characters are split
    pub wrap_width: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 40.0,
            top_margin: 50.0,
            bottom_margin: 40.0,
            line_height: 14.4,
            wrap_width: 90,
        }
    }
}

impl PageLayout {
    /// Vertical position of the first line on a page
    pub fn text_top(&self) -> f64 {
        self.page_height - self.top_margin
    }

    /// Most lines a single page can hold
    pub fn lines_per_page(&self) -> usize {
        ((self.text_top() - self.bottom_margin) / self.line_height).floor() as usize + 1
    }
}
