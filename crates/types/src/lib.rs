//! Shared data types - the tile color palette
//!
//! Pure data with no dependencies, usable from the simulation core, render
//! surfaces, and test harnesses alike.

/// Color of a single board tile.
///
/// `Clear` is the distinguished empty marker: unoccupied cells read as
/// `Clear`, and it must never be assigned to a landed tile. That assignment
/// is a programming error, not a game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Clear,
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
    Orange,
}

impl Color {
    /// The seven fill colors in a stable order (excludes `Clear`).
    pub const FILLED: [Color; 7] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Orange,
    ];

    pub fn is_clear(&self) -> bool {
        matches!(self, Color::Clear)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Clear => "clear",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_excludes_clear() {
        assert_eq!(Color::FILLED.len(), 7);
        assert!(Color::FILLED.iter().all(|c| !c.is_clear()));
    }

    #[test]
    fn test_is_clear() {
        assert!(Color::Clear.is_clear());
        assert!(!Color::Red.is_clear());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Color::Clear.as_str(), "clear");
        assert_eq!(Color::Orange.as_str(), "orange");
    }
}
