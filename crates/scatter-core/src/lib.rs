// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter-plot renderer, its scene model and helpers.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod event;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod transition;
pub mod types;

pub use axis::{Attribute, AxisId, AxisLabel, AxisSelector};
pub use chart::ChartRenderer;
pub use dataset::{Dataset, Record};
pub use error::{ChartError, Result};
pub use event::ChartEvent;
pub use geometry::{Point, Transform};
pub use scale::{padded_domain, LinearScale};
pub use scene::Scene;
pub use theme::{Rgba, Theme};
pub use tooltip::Tooltip;
pub use transition::{Easing, Timeline};
pub use types::{circle_radius, tick_count, ChartConfig, Surface};
