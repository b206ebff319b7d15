//! Text measurement boundary.
//!
//! Width measurement is a host capability: the grid widget's environment owns
//! the actual glyph metrics (an offscreen canvas, a font atlas, a terminal
//! cell model). This module defines the [`TextMeasurer`] seam the plugin
//! calls through, the [`measure_width`] routine that combines text width with
//! an element's horizontal padding, and [`MonospaceMeasurer`], a bundled
//! measurer for hosts where every display column has a fixed advance.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::grid::StyledElement;
use crate::style::FontDescriptor;

/// Metrics returned by a text measurer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Width of the rendered text in pixels.
    pub width: f32,
}

impl TextMetrics {
    /// Creates metrics from a width.
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self { width }
    }
}

/// The host's text-measurement capability.
///
/// Given a string and the font it would be rendered with, returns the pixel
/// metrics of the rendered text. Implementations must be synchronous;
/// measurement happens inside the host's refresh dispatch.
pub trait TextMeasurer {
    /// Measures `text` as it would render under `font`.
    fn measure_text(&self, text: &str, font: &FontDescriptor) -> TextMetrics;
}

/// Measures the width an element needs to render `text`.
///
/// Only the text, the element's computed font, and the element's horizontal
/// padding determine the result. This is a pure function of the element's
/// current computed style and the text: nothing is cached, and every call
/// re-reads the style.
///
/// Empty text yields the padding sum alone.
pub fn measure_width(measurer: &dyn TextMeasurer, element: &dyn StyledElement, text: &str) -> f32 {
    let style = element.computed_style();
    measurer.measure_text(text, &style.font).width + style.padding.horizontal()
}

/// A measurer for hosts where text renders in fixed-advance cells.
///
/// Each display column (as defined by Unicode width rules: ASCII is one
/// column, CJK and emoji are two, combining marks are zero) maps to a fixed
/// pixel advance. The font descriptor is ignored; hosts whose advance depends
/// on the font supply their own [`TextMeasurer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Pixel advance per display column.
    pub advance: f32,
}

impl MonospaceMeasurer {
    /// Creates a measurer with the given pixel advance per column.
    #[must_use]
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for MonospaceMeasurer {
    /// One pixel per column, so measured widths are display column counts.
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_text(&self, text: &str, _font: &FontDescriptor) -> TextMetrics {
        TextMetrics::new(display_columns(text) as f32 * self.advance)
    }
}

/// Counts the display columns of a string.
///
/// Handles wide characters (CJK), zero-width characters, and emoji sequences
/// by measuring per grapheme cluster.
pub fn display_columns(text: &str) -> usize {
    // Fast path for ASCII-only text
    if text.is_ascii() {
        return text.chars().filter(|&c| c != '\n' && c != '\r').count();
    }

    text.graphemes(true).map(grapheme_columns).sum()
}

/// Display columns of a single grapheme cluster.
///
/// Multi-codepoint clusters take the maximum width of their component
/// characters, so combining marks ride along with their base character.
fn grapheme_columns(grapheme: &str) -> usize {
    if grapheme == "\n" || grapheme == "\r" || grapheme == "\r\n" {
        return 0;
    }

    grapheme
        .chars()
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ComputedStyle, EdgeInsets};

    struct FixedElement(ComputedStyle);

    impl StyledElement for FixedElement {
        fn computed_style(&self) -> ComputedStyle {
            self.0.clone()
        }
    }

    #[test]
    fn test_display_columns_ascii() {
        assert_eq!(display_columns("Hello"), 5);
        assert_eq!(display_columns(""), 0);
        assert_eq!(display_columns(" "), 1);
    }

    #[test]
    fn test_display_columns_unicode() {
        assert_eq!(display_columns("日本語"), 6);
        assert_eq!(display_columns("Hi世界"), 6);
        assert_eq!(display_columns("café"), 4);
    }

    #[test]
    fn test_monospace_measurer_advance() {
        let measurer = MonospaceMeasurer::new(8.0);
        let font = FontDescriptor::default();
        assert_eq!(measurer.measure_text("abcd", &font).width, 32.0);
        assert_eq!(measurer.measure_text("", &font).width, 0.0);
    }

    #[test]
    fn test_measure_width_adds_horizontal_padding() {
        let measurer = MonospaceMeasurer::default();
        let element = FixedElement(ComputedStyle::new(
            FontDescriptor::default(),
            EdgeInsets::symmetric(2.0, 4.0),
        ));

        assert_eq!(measure_width(&measurer, &element, "Date"), 4.0 + 8.0);
    }

    #[test]
    fn test_measure_width_empty_text_is_padding_only() {
        let measurer = MonospaceMeasurer::default();
        let element = FixedElement(ComputedStyle::new(
            FontDescriptor::default(),
            EdgeInsets::uniform(3.0),
        ));

        assert_eq!(measure_width(&measurer, &element, ""), 6.0);
    }
}
