//! Form boundary: the surface port, side resolution, cart rendering, and
//! the order controller.
//!
//! The domain crates never touch the display environment; everything they
//! need from it comes through the [`FormSurface`] port defined here.

pub mod controller;
pub mod render;
pub mod resolver;
pub mod surface;

pub use controller::OrderController;
pub use resolver::resolve_side;
pub use surface::FormSurface;
