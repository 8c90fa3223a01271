//! Cart panel rendering.

use slicecart_orders::Pizza;

/// One cart-panel entry.
///
/// `Pizza : 12" thin Mushrooms (left), Olives (full)`: size with its inch
/// mark, then crust, then each topping as `name (side)` comma-separated.
/// A zero-topping pizza ends after the crust.
pub fn cart_entry(pizza: &Pizza) -> String {
    let toppings = pizza
        .toppings()
        .iter()
        .map(|topping| format!("{} ({})", topping.name, topping.side))
        .collect::<Vec<_>>()
        .join(", ");

    if toppings.is_empty() {
        format!("Pizza : {}\" {}", pizza.size(), pizza.crust())
    } else {
        format!("Pizza : {}\" {} {}", pizza.size(), pizza.crust(), toppings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicecart_orders::{Side, Topping};

    #[test]
    fn entry_lists_toppings_with_sides() {
        let mut pizza = Pizza::new("12", "thin");
        pizza.add_topping(Topping::placed("Mushrooms", Side::Left).unwrap());
        pizza.add_topping(Topping::placed("Olives", Side::Full).unwrap());

        assert_eq!(
            cart_entry(&pizza),
            "Pizza : 12\" thin Mushrooms (left), Olives (full)"
        );
    }

    #[test]
    fn single_topping_entry_has_no_separator() {
        let mut pizza = Pizza::new("14", "pan");
        pizza.add_topping(Topping::placed("Pepperoni", Side::Right).unwrap());

        assert_eq!(cart_entry(&pizza), "Pizza : 14\" pan Pepperoni (right)");
    }

    #[test]
    fn zero_topping_entry_ends_after_crust() {
        let pizza = Pizza::new("16", "deep dish");
        assert_eq!(cart_entry(&pizza), "Pizza : 16\" deep dish");
    }
}
