// File: crates/scatter-core/src/chart.rs
// Summary: ChartRenderer: owns dataset, selections, scales and scene; handles clicks, hover, resize and frames.

use std::path::Path;

use crate::axis::{Attribute, AxisId, AxisSelector};
use crate::dataset::Dataset;
use crate::error::{ChartError, Result};
use crate::event::ChartEvent;
use crate::geometry::{Point, Transform};
use crate::scale::{padded_domain, LinearScale};
use crate::scene::{AxisRuler, Circle, LabelGroup, Scene, StateMark, StateText, TooltipBox};
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::transition::{Attr, Key, Node, Timeline};
use crate::types::{ChartConfig, Surface};

pub struct ChartRenderer {
    config: ChartConfig,
    dataset: Dataset,
    surface: Surface,
    x_scale: LinearScale,
    y_scale: LinearScale,
    scene: Scene,
    timeline: Timeline,
    hovered: Option<usize>,
    now_ms: f64,
}

impl ChartRenderer {
    /// Initial draw with default config: X=poverty, Y=obesity.
    pub fn initialize(dataset: Dataset, container_width: f64) -> Self {
        Self::with_config(ChartConfig::default(), dataset, container_width)
    }

    pub fn with_config(config: ChartConfig, dataset: Dataset, container_width: f64) -> Self {
        let surface = Surface::from_container_width(container_width);
        let x_attr = Attribute::default_for(AxisId::X);
        let y_attr = Attribute::default_for(AxisId::Y);
        let x_scale = LinearScale::new(
            padded_domain(dataset.column(x_attr)),
            x_range(&config, surface),
        );
        let y_scale = LinearScale::new(
            padded_domain(dataset.column(y_attr)),
            y_range(&config, surface),
        );

        let scene = Scene {
            surface,
            x_axis: AxisRuler {
                axis: AxisId::X,
                transform: x_axis_transform(&config, surface),
                scale: x_scale,
                tick_count: surface.tick_count(),
            },
            y_axis: AxisRuler {
                axis: AxisId::Y,
                transform: y_axis_transform(&config),
                scale: y_scale,
                tick_count: surface.tick_count(),
            },
            x_labels: LabelGroup {
                transform: x_label_transform(&config, surface),
                selector: AxisSelector::new(AxisId::X),
            },
            y_labels: LabelGroup {
                transform: y_label_transform(&config, surface),
                selector: AxisSelector::new(AxisId::Y),
            },
            marks: Vec::with_capacity(dataset.len()),
            tooltip: None,
        };

        let mut renderer = Self {
            config,
            dataset,
            surface,
            x_scale,
            y_scale,
            scene,
            timeline: Timeline::new(),
            hovered: None,
            now_ms: 0.0,
        };
        renderer.scene.marks = renderer.build_marks();
        log::debug!(
            "initialized {} marks on {}x{} surface",
            renderer.scene.marks.len(),
            surface.width,
            surface.height
        );
        renderer
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Scale the circles are (or are moving) positioned by.
    pub fn scale(&self, axis: AxisId) -> &LinearScale {
        match axis {
            AxisId::X => &self.x_scale,
            AxisId::Y => &self.y_scale,
        }
    }

    pub fn selection(&self, axis: AxisId) -> Attribute {
        self.scene.labels(axis).selector.active()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn circle_radius(&self) -> f64 {
        self.surface.circle_radius()
    }

    pub fn tick_count(&self) -> usize {
        self.surface.tick_count()
    }

    /// Switch `axis` to `attribute` and animate everything along it.
    /// Returns `false` without touching the scene when already selected.
    pub fn select_axis(&mut self, axis: AxisId, attribute: Attribute) -> Result<bool> {
        let previous = match self.scene.labels_mut(axis).selector.activate(attribute)? {
            Some(previous) => previous,
            None => {
                log::debug!("{} axis already shows {}", axis, attribute);
                return Ok(false);
            }
        };
        log::debug!("{} axis: {} -> {}", axis, previous, attribute);

        let domain = padded_domain(self.dataset.column(attribute));
        let scale = match axis {
            AxisId::X => &mut self.x_scale,
            AxisId::Y => &mut self.y_scale,
        };
        scale.domain = domain;
        let scale = *scale;

        self.animate((Node::Axis(axis), Attr::DomainMin), domain.0);
        self.animate((Node::Axis(axis), Attr::DomainMax), domain.1);

        let r = self.circle_radius();
        let targets: Vec<f64> = self
            .dataset
            .column(attribute)
            .map(|v| scale.apply(v))
            .collect();
        for (i, px) in targets.into_iter().enumerate() {
            match axis {
                AxisId::X => {
                    self.animate((Node::Circle(i), Attr::Cx), px);
                    self.animate((Node::StateText(i), Attr::Dx), px);
                }
                AxisId::Y => {
                    self.animate((Node::Circle(i), Attr::Cy), px);
                    self.animate((Node::StateText(i), Attr::Dy), text_dy(px, r));
                }
            }
        }
        Ok(true)
    }

    /// `select_axis` for a click at host time `now_ms`. The clock moves to
    /// `now_ms` first, so the transitions start at the click rather than at
    /// the last frame seen.
    pub fn select_axis_at(
        &mut self,
        axis: AxisId,
        attribute: Attribute,
        now_ms: f64,
    ) -> Result<bool> {
        self.advance_to(now_ms);
        self.select_axis(axis, attribute)
    }

    /// `select_axis` from the label's `data-axis` / `data-name` strings.
    pub fn select_axis_by_name(&mut self, axis: &str, name: &str) -> Result<bool> {
        self.select_axis(axis.parse()?, name.parse()?)
    }

    /// Show the tooltip for record `index` and highlight its circle. A record
    /// hovered before loses its highlight.
    pub fn hover(&mut self, index: usize) -> Result<&TooltipBox> {
        let record = self.dataset.get(index).ok_or(ChartError::UnknownRecord(index))?;
        let tooltip =
            Tooltip::for_record(record, self.selection(AxisId::X), self.selection(AxisId::Y));
        log::debug!("hover {}: {}", record.abbr, tooltip);

        if let Some(prev) = self.hovered.filter(|&prev| prev != index) {
            if let Some(mark) = self.scene.marks.get_mut(prev) {
                mark.circle.highlighted = false;
            }
        }

        let mark = self
            .scene
            .marks
            .get_mut(index)
            .ok_or(ChartError::UnknownRecord(index))?;
        mark.circle.highlighted = true;
        let circle = mark.circle;

        let (top, left) = self.config.tooltip_offset;
        let anchor = Point::new(circle.cx + left, circle.cy - circle.r + top);
        self.hovered = Some(index);
        let tip: &TooltipBox = self.scene.tooltip.insert(TooltipBox { index, anchor, tooltip });
        Ok(tip)
    }

    /// Restore the circle's stroke. The tooltip only goes away when it
    /// belongs to `index`.
    pub fn unhover(&mut self, index: usize) -> Result<()> {
        let mark = self
            .scene
            .marks
            .get_mut(index)
            .ok_or(ChartError::UnknownRecord(index))?;
        mark.circle.highlighted = false;
        if self.scene.tooltip.as_ref().is_some_and(|t| t.index == index) {
            self.scene.tooltip = None;
        }
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        Ok(())
    }

    /// Re-layout for a new container width. Every element snaps to its final
    /// position; in-flight transitions are dropped.
    pub fn resize(&mut self, container_width: f64) {
        let surface = Surface::from_container_width(container_width);
        log::debug!(
            "resize {}x{} -> {}x{}",
            self.surface.width,
            self.surface.height,
            surface.width,
            surface.height
        );
        self.surface = surface;
        self.timeline.drain();

        self.x_scale.range = x_range(&self.config, surface);
        self.y_scale.range = y_range(&self.config, surface);

        let ticks = surface.tick_count();
        self.scene.surface = surface;
        self.scene.x_axis.transform = x_axis_transform(&self.config, surface);
        self.scene.x_axis.scale = self.x_scale;
        self.scene.x_axis.tick_count = ticks;
        self.scene.y_axis.transform = y_axis_transform(&self.config);
        self.scene.y_axis.scale = self.y_scale;
        self.scene.y_axis.tick_count = ticks;
        self.scene.x_labels.transform = x_label_transform(&self.config, surface);
        self.scene.y_labels.transform = y_label_transform(&self.config, surface);

        let highlighted: Vec<bool> =
            self.scene.marks.iter().map(|m| m.circle.highlighted).collect();
        self.scene.marks = self.build_marks();
        for (mark, h) in self.scene.marks.iter_mut().zip(highlighted) {
            mark.circle.highlighted = h;
        }

        if let Some(index) = self.scene.tooltip.as_ref().map(|t| t.index) {
            if let Err(e) = self.hover(index).map(|_| ()) {
                log::warn!("dropping tooltip after resize: {e}");
                self.scene.tooltip = None;
            }
        }
    }

    /// Advance animations to host time `now_ms`. Time never runs backwards.
    pub fn advance_to(&mut self, now_ms: f64) {
        self.now_ms = self.now_ms.max(now_ms);
        for (key, v) in self.timeline.advance(self.now_ms) {
            self.scene.set_attr(key, v);
        }
    }

    /// Jump every running transition to its end value.
    pub fn finish_transitions(&mut self) {
        for (key, v) in self.timeline.drain() {
            self.scene.set_attr(key, v);
        }
    }

    /// Record whose circle lies under `p`, if any.
    pub fn pick(&self, p: Point) -> Option<usize> {
        self.scene.pick(p)
    }

    pub fn handle_event(&mut self, event: ChartEvent) -> Result<()> {
        match event {
            ChartEvent::Click { axis, attribute, now_ms } => {
                self.select_axis_at(axis, attribute, now_ms)?;
            }
            ChartEvent::MouseOver(index) => {
                self.hover(index)?;
            }
            ChartEvent::MouseOut(index) => self.unhover(index)?,
            ChartEvent::PointerMove(p) => {
                let picked = self.pick(p);
                if picked != self.hovered {
                    if let Some(old) = self.hovered {
                        self.unhover(old)?;
                    }
                    if let Some(new) = picked {
                        self.hover(new)?;
                    }
                }
            }
            ChartEvent::Resize { container_width } => self.resize(container_width),
            ChartEvent::Frame { now_ms } => self.advance_to(now_ms),
        }
        Ok(())
    }

    pub fn to_svg(&self, theme: &Theme) -> String {
        crate::svg::to_svg(&self.scene, theme)
    }

    pub fn render_to_svg(&self, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
        crate::svg::render_to_svg(&self.scene, theme, path)
    }

    fn animate(&mut self, key: Key, to: f64) {
        let current = self.scene.attr(key).unwrap_or(to);
        if self.config.transition_ms <= 0.0 {
            self.scene.set_attr(key, to);
            return;
        }
        self.timeline.schedule(
            key,
            current,
            to,
            self.now_ms,
            self.config.transition_ms,
            self.config.easing,
        );
    }

    fn build_marks(&self) -> Vec<StateMark> {
        let r = self.circle_radius();
        let x_attr = self.selection(AxisId::X);
        let y_attr = self.selection(AxisId::Y);
        self.dataset
            .records()
            .iter()
            .map(|rec| {
                let cx = self.x_scale.apply(rec.value(x_attr));
                let cy = self.y_scale.apply(rec.value(y_attr));
                StateMark {
                    abbr: rec.abbr.clone(),
                    circle: Circle { cx, cy, r, highlighted: false },
                    text: StateText { dx: cx, dy: text_dy(cy, r), font_size: r },
                }
            })
            .collect()
    }
}

/// Baseline that vertically centers an abbreviation of font size `r`.
fn text_dy(cy: f64, r: f64) -> f64 {
    cy + r / 3.0
}

fn x_range(cfg: &ChartConfig, s: Surface) -> (f64, f64) {
    (cfg.margin + cfg.label_area, s.width - cfg.margin)
}

fn y_range(cfg: &ChartConfig, s: Surface) -> (f64, f64) {
    (s.height - cfg.margin - cfg.label_area, cfg.margin)
}

fn x_axis_transform(cfg: &ChartConfig, s: Surface) -> Transform {
    Transform::translate(0.0, s.height - cfg.margin - cfg.label_area)
}

fn y_axis_transform(cfg: &ChartConfig) -> Transform {
    Transform::translate(cfg.margin + cfg.label_area, 0.0)
}

fn x_label_transform(cfg: &ChartConfig, s: Surface) -> Transform {
    Transform::translate(
        (s.width - cfg.label_area) / 2.0 + cfg.label_area,
        s.height - cfg.margin - cfg.text_pad_bottom,
    )
}

fn y_label_transform(cfg: &ChartConfig, s: Surface) -> Transform {
    Transform::translate(
        cfg.margin + cfg.text_pad_left,
        (s.height + cfg.label_area) / 2.0 - cfg.label_area,
    )
    .rotated(-90.0)
}
