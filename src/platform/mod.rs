//! Platform abstraction layer
//!
//! Maps raw host input onto rules-engine input. Rendering and event delivery
//! stay with the host.

use crate::sim::Side;

/// Side chosen by a touch/click at horizontal position `x`
///
/// Right half of the viewport is Right; the left half and the exact
/// midpoint are Left.
pub fn side_for_touch(x: f32, viewport_width: f32) -> Side {
    if x > viewport_width / 2.0 {
        Side::Right
    } else {
        Side::Left
    }
}
