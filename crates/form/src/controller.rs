//! Submission handling: one activation event, end to end.

use slicecart_core::DomainResult;
use slicecart_orders::{Cart, Pizza, Topping};

use crate::render;
use crate::resolver::resolve_side;
use crate::surface::FormSurface;

/// Orchestrates add-to-cart submissions.
///
/// The controller owns the session cart. `handle_submit` runs to
/// completion before the next event is read, so submissions never overlap;
/// between calls the controller sits idle, re-armed for the life of the
/// session.
#[derive(Debug, Default)]
pub struct OrderController {
    cart: Cart,
}

impl OrderController {
    pub fn new() -> Self {
        Self { cart: Cart::new() }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Handle one add-to-cart activation.
    ///
    /// Reads the size and crust values, assembles the pizza from the
    /// topping rows, appends it to the cart, then clears and fully repaints
    /// the cart panel and price text. A missing control aborts this
    /// submission before the cart is touched; the controller stays usable
    /// for the next one.
    pub fn handle_submit(&mut self, surface: &mut dyn FormSurface) -> DomainResult<()> {
        let pizza = build_pizza(surface)?;
        tracing::debug!(pizza = ?pizza, "assembled pizza from form");

        self.cart.add_item(pizza);
        tracing::debug!(items = self.cart.len(), total = %self.cart.price(), "cart updated");

        let entries: Vec<String> = self.cart.items().iter().map(render::cart_entry).collect();
        surface.render_cart(&entries);
        surface.set_price_text(&self.cart.formatted_price());

        Ok(())
    }
}

/// Assemble a pizza from the current form state.
///
/// Rows whose placement resolves to `none` yield no topping; the rest are
/// appended in row order.
fn build_pizza(surface: &dyn FormSurface) -> DomainResult<Pizza> {
    let mut pizza = Pizza::new(surface.size_value()?, surface.crust_value()?);

    for name in surface.topping_rows()? {
        let side = resolve_side(surface, &name);
        if let Some(topping) = Topping::placed(name, side) {
            pizza.add_topping(topping);
        }
    }

    Ok(pizza)
}
