//! Player color representation.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The four player colors, in their default turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Green = 1,
    Yellow = 2,
    Blue = 3,
}

/// Error returned when parsing an unknown color name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color: '{0}'")]
pub struct ParseColorError(pub String);

impl Color {
    /// All colors in default turn order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Returns the index (0-3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a color from index (0-3).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Green),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            _ => None,
        }
    }

    /// Returns the single-letter abbreviation used in text boards.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Green => write!(f, "Green"),
            Color::Yellow => write!(f, "Yellow"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "green" | "g" => Ok(Color::Green),
            "yellow" | "y" => Ok(Color::Yellow),
            "blue" | "b" => Ok(Color::Blue),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}
