//! The form-surface port: what the display environment must provide.

use slicecart_core::DomainResult;

/// The environment-provided order form: readable controls plus writable
/// display targets.
///
/// Reads are fallible; a control that cannot be found or read aborts the
/// current submission. Writes are plain display updates and cannot fail.
///
/// A topping's placement group is the row's set of mutually-exclusive
/// controls in declared order (whole pizza, right half, left half, none).
/// Radio-group semantics mean at most one flag is set, but implementations
/// are not required to enforce that; the resolver takes the first.
pub trait FormSurface {
    /// Current value of the size control.
    fn size_value(&self) -> DomainResult<String>;

    /// Current value of the crust control.
    fn crust_value(&self) -> DomainResult<String>;

    /// Display names of the topping rows, in form order.
    fn topping_rows(&self) -> DomainResult<Vec<String>>;

    /// Selected-flags of the placement group keyed by a topping's display
    /// name, in declared control order. `None` when no such group exists.
    fn placement_group(&self, topping_name: &str) -> Option<Vec<bool>>;

    /// Clear the cart panel and repopulate it with the rendered entries,
    /// one per cart item.
    fn render_cart(&mut self, entries: &[String]);

    /// Update the displayed total price.
    fn set_price_text(&mut self, price: &str);
}
