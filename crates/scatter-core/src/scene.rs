// File: crates/scatter-core/src/scene.rs
// Summary: Retained drawing model (axis rulers, label groups, state marks, tooltip) that backends emit.

use crate::axis::{AxisId, AxisSelector};
use crate::format::format_fixed_grouped;
use crate::geometry::{Point, Transform};
use crate::grid::{tick_precision, tick_step};
use crate::scale::LinearScale;
use crate::tooltip::Tooltip;
use crate::transition::{Attr, Key, Node};
use crate::types::Surface;

/// Inner tick length, pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and its label, pixels.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub highlighted: bool,
}

/// Abbreviation drawn over a circle; `dx`/`dy` are absolute positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateText {
    pub dx: f64,
    pub dy: f64,
    pub font_size: f64,
}

/// Circle plus centered abbreviation for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct StateMark {
    pub abbr: String,
    pub circle: Circle,
    pub text: StateText,
}

impl StateMark {
    pub fn circle_class(&self) -> String {
        format!("stateCircle {}", self.abbr)
    }

    pub fn contains(&self, p: Point) -> bool {
        let c = Point::new(self.circle.cx, self.circle.cy);
        c.distance_sq(p) <= self.circle.r * self.circle.r
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the ruler, pixels.
    pub offset: f64,
    pub label: String,
}

/// Bottom (X) or left (Y) axis ruler. `scale` holds the displayed domain,
/// which lags the plotted scale while an axis transition runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRuler {
    pub axis: AxisId,
    pub transform: Transform,
    pub scale: LinearScale,
    pub tick_count: usize,
}

impl AxisRuler {
    pub fn class(&self) -> &'static str {
        match self.axis {
            AxisId::X => "xAxis",
            AxisId::Y => "yAxis",
        }
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let (d0, d1) = self.scale.domain;
        let decimals = tick_precision(tick_step(d0, d1, self.tick_count));
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| Tick {
                value,
                offset: self.scale.apply(value),
                label: format_fixed_grouped(value, decimals),
            })
            .collect()
    }

    /// Outer domain line with end caps, in group-local coordinates.
    pub fn domain_path(&self) -> String {
        let (r0, r1) = self.scale.range;
        match self.axis {
            AxisId::X => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            AxisId::Y => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        }
    }
}

/// The three selector labels of one axis and the group transform placing them.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelGroup {
    pub transform: Transform,
    pub selector: AxisSelector,
}

impl LabelGroup {
    pub fn class(&self) -> &'static str {
        match self.selector.axis() {
            AxisId::X => "xText",
            AxisId::Y => "yText",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipBox {
    pub index: usize,
    /// Top-left of the box, surface coordinates.
    pub anchor: Point,
    pub tooltip: Tooltip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub surface: Surface,
    pub x_axis: AxisRuler,
    pub y_axis: AxisRuler,
    pub x_labels: LabelGroup,
    pub y_labels: LabelGroup,
    pub marks: Vec<StateMark>,
    pub tooltip: Option<TooltipBox>,
}

impl Scene {
    pub fn axis(&self, axis: AxisId) -> &AxisRuler {
        match axis {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, axis: AxisId) -> &mut AxisRuler {
        match axis {
            AxisId::X => &mut self.x_axis,
            AxisId::Y => &mut self.y_axis,
        }
    }

    pub fn labels(&self, axis: AxisId) -> &LabelGroup {
        match axis {
            AxisId::X => &self.x_labels,
            AxisId::Y => &self.y_labels,
        }
    }

    pub fn labels_mut(&mut self, axis: AxisId) -> &mut LabelGroup {
        match axis {
            AxisId::X => &mut self.x_labels,
            AxisId::Y => &mut self.y_labels,
        }
    }

    /// Current value of an animatable attribute. `None` for pairs that do not
    /// exist (e.g. `cx` on a text, or an out-of-range index).
    pub fn attr(&self, (node, attr): Key) -> Option<f64> {
        match (node, attr) {
            (Node::Circle(i), Attr::Cx) => self.marks.get(i).map(|m| m.circle.cx),
            (Node::Circle(i), Attr::Cy) => self.marks.get(i).map(|m| m.circle.cy),
            (Node::StateText(i), Attr::Dx) => self.marks.get(i).map(|m| m.text.dx),
            (Node::StateText(i), Attr::Dy) => self.marks.get(i).map(|m| m.text.dy),
            (Node::Axis(a), Attr::DomainMin) => Some(self.axis(a).scale.domain.0),
            (Node::Axis(a), Attr::DomainMax) => Some(self.axis(a).scale.domain.1),
            _ => None,
        }
    }

    pub fn set_attr(&mut self, (node, attr): Key, v: f64) {
        match (node, attr) {
            (Node::Circle(i), Attr::Cx) => {
                if let Some(m) = self.marks.get_mut(i) {
                    m.circle.cx = v;
                }
            }
            (Node::Circle(i), Attr::Cy) => {
                if let Some(m) = self.marks.get_mut(i) {
                    m.circle.cy = v;
                }
            }
            (Node::StateText(i), Attr::Dx) => {
                if let Some(m) = self.marks.get_mut(i) {
                    m.text.dx = v;
                }
            }
            (Node::StateText(i), Attr::Dy) => {
                if let Some(m) = self.marks.get_mut(i) {
                    m.text.dy = v;
                }
            }
            (Node::Axis(a), Attr::DomainMin) => self.axis_mut(a).scale.domain.0 = v,
            (Node::Axis(a), Attr::DomainMax) => self.axis_mut(a).scale.domain.1 = v,
            _ => log::warn!("ignoring {:?} on {:?}", attr, node),
        }
    }

    /// Topmost mark under `p`; later marks draw over earlier ones.
    pub fn pick(&self, p: Point) -> Option<usize> {
        self.marks.iter().rposition(|m| m.contains(p))
    }
}
