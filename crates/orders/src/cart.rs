use serde::{Deserialize, Serialize};

use slicecart_core::Money;

use crate::pizza::Pizza;

/// Price charged per topping, regardless of side placement.
pub const TOPPING_UNIT_PRICE: Money = Money::from_cents(150);

/// Session cart: submitted pizzas in submission order plus the derived
/// total price.
///
/// Items are append-only, never removed or reordered. The price is
/// recomputed from scratch on every insertion rather than maintained
/// incrementally, so the accumulator cannot drift from the true sum.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Pizza>,
    price: Money,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pizza and recompute the total immediately.
    ///
    /// No upper bound, no deduplication: submitting the same order twice
    /// yields two items.
    pub fn add_item(&mut self, pizza: Pizza) {
        self.items.push(pizza);
        self.calculate_price();
    }

    /// Recompute the total from the items: topping count × unit price per
    /// pizza. Zero-topping pizzas contribute nothing. Idempotent between
    /// mutations.
    pub fn calculate_price(&mut self) -> Money {
        self.price = Money::ZERO;
        for item in &self.items {
            self.price += TOPPING_UNIT_PRICE * item.topping_count() as u64;
        }
        self.price
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// The total as its display string, e.g. `$3.00`.
    pub fn formatted_price(&self) -> String {
        self.price.to_string()
    }

    pub fn items(&self) -> &[Pizza] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;
    use crate::topping::Topping;

    fn pizza_with_toppings(count: usize) -> Pizza {
        let mut pizza = Pizza::new("12", "thin");
        for i in 0..count {
            let side = [Side::Full, Side::Right, Side::Left][i % 3];
            pizza.add_topping(Topping::placed(format!("Topping {i}"), side).unwrap());
        }
        pizza
    }

    #[test]
    fn empty_cart_formats_as_zero_dollars() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.formatted_price(), "$0.00");
    }

    #[test]
    fn add_item_recomputes_price_immediately() {
        let mut cart = Cart::new();
        cart.add_item(pizza_with_toppings(2));

        assert_eq!(cart.price(), Money::from_cents(300));
        assert_eq!(cart.formatted_price(), "$3.00");
    }

    #[test]
    fn zero_topping_pizza_contributes_nothing() {
        let mut cart = Cart::new();
        cart.add_item(pizza_with_toppings(2));
        cart.add_item(pizza_with_toppings(0));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.formatted_price(), "$3.00");
    }

    #[test]
    fn one_and_three_topping_pizzas_total_six_dollars() {
        let mut cart = Cart::new();
        cart.add_item(pizza_with_toppings(1));
        cart.add_item(pizza_with_toppings(3));

        assert_eq!(cart.price(), Money::from_cents(600));
        assert_eq!(cart.formatted_price(), "$6.00");
    }

    #[test]
    fn calculate_price_is_idempotent_between_mutations() {
        let mut cart = Cart::new();
        cart.add_item(pizza_with_toppings(2));

        let first = cart.calculate_price();
        let second = cart.calculate_price();
        assert_eq!(first, second);
        assert_eq!(cart.price(), first);
    }

    #[test]
    fn items_stay_in_submission_order() {
        let mut cart = Cart::new();
        cart.add_item(Pizza::new("10", "thin"));
        cart.add_item(Pizza::new("14", "deep dish"));

        let sizes: Vec<&str> = cart.items().iter().map(|p| p.size()).collect();
        assert_eq!(sizes, ["10", "14"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of added pizzas, the cart price
            /// equals the sum of topping counts times the unit price.
            #[test]
            fn price_equals_topping_count_times_unit_price(
                topping_counts in prop::collection::vec(0usize..8, 0..12)
            ) {
                let mut cart = Cart::new();
                for &count in &topping_counts {
                    cart.add_item(pizza_with_toppings(count));
                }

                let expected: u64 = topping_counts
                    .iter()
                    .map(|&count| count as u64 * TOPPING_UNIT_PRICE.cents())
                    .sum();

                prop_assert_eq!(cart.price(), Money::from_cents(expected));
                prop_assert_eq!(cart.len(), topping_counts.len());
            }
        }
    }
}
