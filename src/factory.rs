//! Enum-keyed factory over a closed set of shape variants.
//!
//! The classic version of this factory compares strings at runtime and
//! falls back to reflection for arbitrary types. Here the set of variants
//! is closed, so the dispatch is a plain `match` and unknown names fail at
//! parse time.

use std::str::FromStr;

use crate::error::FactoryError;
use crate::shapes::{Circle, Draw, Rectangle, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Square];

    /// Creates a fresh shape of this kind.
    pub fn create(self) -> Box<dyn Draw> {
        match self {
            ShapeKind::Circle => Box::new(Circle::default()),
            ShapeKind::Rectangle => Box::new(Rectangle),
            ShapeKind::Square => Box::new(Square),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = FactoryError;

    /// Case-insensitive, so `"CIRCLE"` and `"circle"` name the same kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            "square" => Ok(ShapeKind::Square),
            _ => Err(FactoryError::unknown_variant(s)),
        }
    }
}
