// File: crates/scatter-core/src/types.rs
// Summary: Layout configuration and surface geometry derived from the container width.

use crate::transition::Easing;

/// Container width used when the host does not report one.
pub const DEFAULT_CONTAINER_WIDTH: f64 = 960.0;

/// Surface height is `width - width / ASPECT_DIVISOR`.
pub const ASPECT_DIVISOR: f64 = 3.9;

/// Widths at or below this draw 5px circles; wider surfaces draw 10px.
pub const RADIUS_BREAKPOINT: f64 = 530.0;

/// Widths at or below this draw 5 ticks per axis; wider surfaces draw 10.
pub const TICK_BREAKPOINT: f64 = 500.0;

/// Layout and animation knobs. Defaults reproduce the published chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Outer margin around the plot, in pixels.
    pub margin: f64,
    /// Space reserved left of and below the plot for the axis-label groups.
    pub label_area: f64,
    /// Padding between the bottom label group and the surface edge.
    pub text_pad_bottom: f64,
    /// Padding between the left label group and the surface edge.
    pub text_pad_left: f64,
    /// Axis-change animation length in milliseconds.
    pub transition_ms: f64,
    pub easing: Easing,
    /// Tooltip offset from the hovered circle's top-center: (top, left).
    pub tooltip_offset: (f64, f64),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            label_area: 110.0,
            text_pad_bottom: 40.0,
            text_pad_left: 40.0,
            transition_ms: 300.0,
            easing: Easing::CubicInOut,
            tooltip_offset: (40.0, -60.0),
        }
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Fixed aspect: the height follows from the container width.
    pub fn from_container_width(width: f64) -> Self {
        Self { width, height: width - width / ASPECT_DIVISOR }
    }

    pub fn circle_radius(&self) -> f64 {
        circle_radius(self.width)
    }

    pub fn tick_count(&self) -> usize {
        tick_count(self.width)
    }
}

/// Circle radius for a surface of `width` pixels.
pub fn circle_radius(width: f64) -> f64 {
    if width <= RADIUS_BREAKPOINT { 5.0 } else { 10.0 }
}

/// Ticks per axis for a surface of `width` pixels.
pub fn tick_count(width: f64) -> usize {
    if width <= TICK_BREAKPOINT { 5 } else { 10 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_aspect() {
        let s = Surface::from_container_width(780.0);
        assert!((s.height - 580.0).abs() < 1e-9);
    }
}
