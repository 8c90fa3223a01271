use serde::{Deserialize, Serialize};

use slicecart_core::ValueObject;

/// Which part of the pizza a topping covers.
///
/// Variant order matches the fixed order of the placement controls on the
/// form: position 0 is whole-pizza, then right half, left half, and finally
/// "no placement" (the topping is left off entirely).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Full,
    Right,
    Left,
    None,
}

impl Side {
    /// Map a placement-control position to its side.
    ///
    /// Only positions 0..=3 exist on the form; anything beyond maps to
    /// nothing and callers skip it.
    pub fn from_position(position: usize) -> Option<Side> {
        match position {
            0 => Some(Side::Full),
            1 => Some(Side::Right),
            2 => Some(Side::Left),
            3 => Some(Side::None),
            _ => Option::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Full => "full",
            Side::Right => "right",
            Side::Left => "left",
            Side::None => "none",
        }
    }

    /// True when this placement leaves the topping off the pizza.
    pub fn is_none(&self) -> bool {
        matches!(self, Side::None)
    }
}

impl ValueObject for Side {}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
