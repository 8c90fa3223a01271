//! Side resolution from a placement-control group.

use slicecart_orders::Side;

use crate::surface::FormSurface;

/// Resolve which side a topping was placed on.
///
/// Scans the topping's placement group in declared control order and maps
/// the first selected control by position: whole pizza, right half, left
/// half, none. A selected control past the fourth position is skipped and
/// scanning continues. No selection (or no group at all) resolves to
/// `none`.
///
/// Pure read of surface state; no side effects.
pub fn resolve_side(surface: &dyn FormSurface, topping_name: &str) -> Side {
    let Some(group) = surface.placement_group(topping_name) else {
        return Side::None;
    };

    group
        .iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .find_map(|(position, _)| Side::from_position(position))
        .unwrap_or(Side::None)
}
