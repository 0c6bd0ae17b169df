// File: crates/scatter-core/src/event.rs
// Summary: Host input events delivered one at a time to `ChartRenderer::handle_event`.

use crate::axis::{Attribute, AxisId};
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    /// Click on an axis-selector label at host time `now_ms`.
    Click { axis: AxisId, attribute: Attribute, now_ms: f64 },
    /// Pointer entered the circle or abbreviation of a record.
    MouseOver(usize),
    /// Pointer left the circle or abbreviation of a record.
    MouseOut(usize),
    /// Pointer moved to a surface position; hover follows whatever is picked.
    PointerMove(Point),
    /// Container width changed.
    Resize { container_width: f64 },
    /// Animation frame at host time `now_ms`.
    Frame { now_ms: f64 },
}
