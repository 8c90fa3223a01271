use serde::{Deserialize, Serialize};

use slicecart_core::ValueObject;

use crate::side::Side;

/// A topping chosen for one pizza: display name + side placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    pub name: String,
    pub side: Side,
}

impl Topping {
    /// Construct a placed topping.
    ///
    /// A `none` placement yields no topping at all, so a pizza can never
    /// hold an off-the-pizza entry.
    pub fn placed(name: impl Into<String>, side: Side) -> Option<Topping> {
        if side.is_none() {
            return None;
        }
        Some(Topping {
            name: name.into(),
            side,
        })
    }
}

impl ValueObject for Topping {}
