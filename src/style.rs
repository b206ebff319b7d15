//! Computed style values consumed during measurement.
//!
//! A [`ComputedStyle`] is the transient measurement context: the resolved
//! font and horizontal padding of a rendering element at the moment a column
//! is sized. It is rebuilt from the host on every call and never cached
//! across refreshes.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Font rendering attributes that affect glyph advance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FontAttributes: u8 {
        /// Bold weight.
        const BOLD = 1 << 0;
        /// Italic slant.
        const ITALIC = 1 << 1;
        /// Oblique slant.
        const OBLIQUE = 1 << 2;
    }
}

/// A resolved font description, as accepted by a text measurer.
///
/// This carries the properties of an element's effective font that influence
/// text width: family, size, and attribute flags. Its [`fmt::Display`]
/// rendering is a CSS-style shorthand (`"bold 12px sans-serif"`), which is
/// what canvas-backed measurers typically consume.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name.
    pub family: String,
    /// Font size in pixels.
    pub size: f32,
    /// Attribute flags (bold, italic, oblique).
    pub attributes: FontAttributes,
}

impl FontDescriptor {
    /// Creates a font descriptor with no attribute flags.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            attributes: FontAttributes::empty(),
        }
    }

    /// Sets the attribute flags.
    #[must_use]
    pub fn with_attributes(mut self, attributes: FontAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the bold flag.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attributes |= FontAttributes::BOLD;
        self
    }

    /// Sets the italic flag.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.attributes |= FontAttributes::ITALIC;
        self
    }

    /// Returns true if the bold flag is set.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(FontAttributes::BOLD)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("sans-serif", 12.0)
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.contains(FontAttributes::ITALIC) {
            write!(f, "italic ")?;
        } else if self.attributes.contains(FontAttributes::OBLIQUE) {
            write!(f, "oblique ")?;
        }
        if self.attributes.contains(FontAttributes::BOLD) {
            write!(f, "bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// Resolved edge values in pixels.
///
/// Represents an element's computed padding. Only the horizontal sum matters
/// for column sizing, but all four sides are carried so hosts can hand over
/// their computed style unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    /// Top edge value in pixels.
    pub top: f32,
    /// Right edge value in pixels.
    pub right: f32,
    /// Bottom edge value in pixels.
    pub bottom: f32,
    /// Left edge value in pixels.
    pub left: f32,
}

impl EdgeInsets {
    /// Creates new edge values.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates edge values with all sides set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates uniform edge values.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates symmetric edge values (vertical, horizontal).
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Returns the total horizontal (left + right) value.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Returns the total vertical (top + bottom) value.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// The computed style of a rendering element at measurement time.
///
/// Built fresh from the host's style resolution on every measurement; the
/// sizing pass never stores one beyond a single call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedStyle {
    /// The element's effective font.
    pub font: FontDescriptor,
    /// The element's resolved padding.
    pub padding: EdgeInsets,
}

impl ComputedStyle {
    /// Creates a computed style from a font and padding.
    #[must_use]
    pub const fn new(font: FontDescriptor, padding: EdgeInsets) -> Self {
        Self { font, padding }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_descriptor_display() {
        let font = FontDescriptor::new("sans-serif", 12.0);
        assert_eq!(format!("{}", font), "12px sans-serif");

        let font = FontDescriptor::new("monospace", 14.0).bold();
        assert_eq!(format!("{}", font), "bold 14px monospace");

        let font = FontDescriptor::new("serif", 10.0).bold().italic();
        assert_eq!(format!("{}", font), "italic bold 10px serif");
    }

    #[test]
    fn test_font_attributes() {
        let font = FontDescriptor::default();
        assert!(!font.is_bold());
        assert!(font.bold().is_bold());
    }

    #[test]
    fn test_edge_insets_sums() {
        let edges = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(edges.horizontal(), 6.0);
        assert_eq!(edges.vertical(), 4.0);

        assert_eq!(EdgeInsets::uniform(4.0).horizontal(), 8.0);
        assert_eq!(EdgeInsets::symmetric(0.0, 3.0).horizontal(), 6.0);
        assert_eq!(EdgeInsets::zero().horizontal(), 0.0);
    }
}
