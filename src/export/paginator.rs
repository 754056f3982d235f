use log::debug;

use super::{Canvas, PageLayout};

/// One line of text at its position on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// A laid-out multi-page document, ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Draw every page onto `canvas`, in order. The first drawing failure is
    /// returned as is.
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        for page in &self.pages {
            for line in &page.lines {
                canvas.draw_text(line.x, line.y, &line.text)?;
            }
            canvas.finish_page()?;
        }
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }
}

/// Turn recipe markdown into display lines: heading markers and `**`
/// emphasis are removed and `- ` bullets become `• `.
///
/// Removing `**` goes beyond heading and bullet normalization on purpose, so
/// the bold option labels don't show their markers on the page.
pub fn prepare_lines(markdown: &str) -> Vec<String> {
    markdown
        .lines()
        .map(|line| {
            let line = strip_heading(line).replace("**", "");
            let line = line.trim_end();
            match line.strip_prefix("- ") {
                Some(rest) => format!("\u{2022} {}", rest),
                None => line.to_string(),
            }
        })
        .collect()
}

fn strip_heading(line: &str) -> &str {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if hashes > 0 {
        if let Some(rest) = line[hashes..].strip_prefix(' ') {
            return rest;
        }
    }
    line
}

/// Split a line into chunks of at most `width` characters. Not word aware.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![line.to_string()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Lay lines out top to bottom, starting a new page whenever the cursor falls
/// below the bottom margin. Overlong lines are wrapped first and every chunk
/// is checked against the margin on its own.
pub fn paginate(lines: &[String], layout: &PageLayout) -> Document {
    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut cursor = layout.text_top();

    for line in lines {
        for chunk in wrap(line, layout.wrap_width) {
            current.lines.push(PlacedLine {
                x: layout.left_margin,
                y: cursor,
                text: chunk,
            });
            cursor = layout.text_top() - current.lines.len() as f64 * layout.line_height;

            if cursor < layout.bottom_margin {
                debug!("Page {} full with {} lines", pages.len() + 1, current.lines.len());
                pages.push(std::mem::take(&mut current));
                cursor = layout.text_top();
            }
        }
    }

    if !current.lines.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    Document { pages }
}
