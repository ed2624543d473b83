//! Palette module - ordered color schemes for pieces
//!
//! A `ColorScheme` is pure data: an ordered list of colors where index 0 is
//! the board background and indices `1..len` are piece colors. The scheme is
//! passed explicitly into the session configuration; nothing in the engine
//! holds a global palette.

use blockfall_types::{ColorIndex, Rgb};

/// An ordered palette; index 0 is the background, the rest are piece colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    colors: Vec<Rgb>,
}

impl ColorScheme {
    /// Create a scheme from an ordered color list.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two colors are given; a scheme needs a
    /// background plus at least one piece color.
    pub fn new(colors: Vec<Rgb>) -> Self {
        assert!(
            colors.len() >= 2,
            "color scheme needs a background and at least one piece color"
        );
        Self { colors }
    }

    /// The bright default scheme.
    pub fn bright() -> Self {
        Self::new(vec![
            Rgb::new(20, 20, 28),    // background
            Rgb::new(0, 230, 230),   // cyan
            Rgb::new(240, 220, 0),   // yellow
            Rgb::new(170, 0, 240),   // purple
            Rgb::new(0, 220, 70),    // green
            Rgb::new(240, 50, 50),   // red
            Rgb::new(40, 90, 250),   // blue
            Rgb::new(250, 140, 20),  // orange
        ])
    }

    /// Total number of entries, background included
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Number of piece colors (everything but the background)
    pub fn piece_colors(&self) -> u8 {
        (self.colors.len() - 1) as u8
    }

    /// The background color (index 0)
    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// Look up a color by index. None if the index is out of range.
    pub fn color(&self, index: ColorIndex) -> Option<Rgb> {
        self.colors.get(index as usize).copied()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::bright()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_scheme_lookup() {
        let scheme = ColorScheme::bright();
        assert!(scheme.len() >= 2);
        assert_eq!(scheme.color(0), Some(scheme.background()));
        assert!(scheme.color(scheme.piece_colors()).is_some());
        assert!(scheme.color(scheme.len() as u8).is_none());
    }

    #[test]
    fn test_piece_colors_excludes_background() {
        let scheme = ColorScheme::new(vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
        ]);
        assert_eq!(scheme.piece_colors(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one piece color")]
    fn test_too_small_scheme_panics() {
        let _ = ColorScheme::new(vec![Rgb::new(0, 0, 0)]);
    }
}
