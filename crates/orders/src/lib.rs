//! Order domain module.
//!
//! This crate contains the business rules for pizza orders and the session
//! cart, implemented purely as deterministic domain logic (no IO, no
//! display-environment access).

pub mod cart;
pub mod pizza;
pub mod side;
pub mod topping;

pub use cart::{Cart, TOPPING_UNIT_PRICE};
pub use pizza::Pizza;
pub use side::Side;
pub use topping::Topping;
