use serde::{Deserialize, Serialize};

use crate::topping::Topping;

/// One pizza order: the raw size and crust selections plus the placed
/// toppings in form-row order.
///
/// Size and crust are whatever the form produced, taken verbatim. Any
/// string is accepted, including the empty string; there is no catalog to
/// validate against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    size: String,
    crust: String,
    toppings: Vec<Topping>,
}

impl Pizza {
    pub fn new(size: impl Into<String>, crust: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            crust: crust.into(),
            toppings: Vec::new(),
        }
    }

    /// Append a topping, preserving insertion order.
    ///
    /// `Topping::placed` already filtered out `none` placements, so every
    /// topping that reaches a pizza covers some part of it.
    pub fn add_topping(&mut self, topping: Topping) {
        self.toppings.push(topping);
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    #[test]
    fn toppings_keep_insertion_order() {
        let mut pizza = Pizza::new("12", "thin");
        pizza.add_topping(Topping::placed("Mushrooms", Side::Left).unwrap());
        pizza.add_topping(Topping::placed("Olives", Side::Full).unwrap());
        pizza.add_topping(Topping::placed("Onions", Side::Right).unwrap());

        let names: Vec<&str> = pizza.toppings().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Mushrooms", "Olives", "Onions"]);
    }

    #[test]
    fn size_and_crust_are_taken_verbatim() {
        let pizza = Pizza::new("", "");
        assert_eq!(pizza.size(), "");
        assert_eq!(pizza.crust(), "");
        assert_eq!(pizza.topping_count(), 0);
    }
}
