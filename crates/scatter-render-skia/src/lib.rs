// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws a scatter-core Scene (rulers, labels, marks, tooltip) to PNG.

use anyhow::{Context, Result};
use skia_safe as skia;

use scatter_core::scene::{AxisRuler, LabelGroup, TICK_PADDING, TICK_SIZE};
use scatter_core::svg::{TOOLTIP_HEIGHT, TOOLTIP_WIDTH};
use scatter_core::{AxisId, Point, Rgba, Scene, Theme};

pub struct RenderOptions {
    pub theme: Theme,
    /// Text drawing can be turned off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true }
    }
}

enum Anchor {
    Start,
    Middle,
    End,
}

pub struct SkiaRenderer {
    opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Render `scene` to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let w = scene.surface.width.round().max(1.0) as i32;
        let h = scene.surface.height.round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.draw(surface.canvas(), scene);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `scene` to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, scene: &Scene) {
        let theme = &self.opts.theme;
        canvas.clear(color(theme.background));

        if self.opts.draw_labels {
            self.draw_label_group(canvas, &scene.x_labels);
            self.draw_label_group(canvas, &scene.y_labels);
        }
        self.draw_ruler(canvas, &scene.x_axis);
        self.draw_ruler(canvas, &scene.y_axis);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(theme.circle_fill));

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);

        for mark in &scene.marks {
            let c = &mark.circle;
            if !c.cx.is_finite() || !c.cy.is_finite() {
                continue;
            }
            let center = (c.cx as f32, c.cy as f32);
            canvas.draw_circle(center, c.r as f32, &fill);
            let edge = if c.highlighted { theme.circle_stroke_hover } else { theme.circle_stroke };
            stroke.set_color(color(edge));
            canvas.draw_circle(center, c.r as f32, &stroke);
        }

        if self.opts.draw_labels {
            let mut font = skia::Font::default();
            let paint = text_paint(theme.state_text);
            for mark in &scene.marks {
                let t = &mark.text;
                if !t.dx.is_finite() || !t.dy.is_finite() {
                    continue;
                }
                font.set_size(t.font_size as f32);
                let (x, y) = (t.dx as f32, t.dy as f32);
                draw_text(canvas, &mark.abbr, x, y, &font, &paint, Anchor::Middle);
            }
        }

        if let Some(tip) = &scene.tooltip {
            self.draw_tooltip(canvas, tip.anchor, &tip.tooltip.lines());
        }
    }

    fn draw_ruler(&self, canvas: &skia::Canvas, ruler: &AxisRuler) {
        let theme = &self.opts.theme;
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(1.0);
        line.set_color(color(theme.axis_line));

        let t = ruler.transform;
        let at = |x: f64, y: f64| -> (f32, f32) {
            let p = t.apply(Point::new(x, y));
            (p.x as f32, p.y as f32)
        };
        let (r0, r1) = ruler.scale.range;
        match ruler.axis {
            AxisId::X => canvas.draw_line(at(r0, 0.0), at(r1, 0.0), &line),
            AxisId::Y => canvas.draw_line(at(0.0, r0), at(0.0, r1), &line),
        };

        let mut font = skia::Font::default();
        font.set_size(10.0);
        let paint = text_paint(theme.tick_label);
        let gap = TICK_SIZE + TICK_PADDING;
        for tick in ruler.ticks() {
            let o = tick.offset;
            match ruler.axis {
                AxisId::X => {
                    canvas.draw_line(at(o, 0.0), at(o, TICK_SIZE), &line);
                    if self.opts.draw_labels {
                        let (x, y) = at(o, gap + 7.1);
                        draw_text(canvas, &tick.label, x, y, &font, &paint, Anchor::Middle);
                    }
                }
                AxisId::Y => {
                    canvas.draw_line(at(0.0, o), at(-TICK_SIZE, o), &line);
                    if self.opts.draw_labels {
                        let (x, y) = at(-gap, o + 3.2);
                        draw_text(canvas, &tick.label, x, y, &font, &paint, Anchor::End);
                    }
                }
            }
        }
    }

    fn draw_label_group(&self, canvas: &skia::Canvas, group: &LabelGroup) {
        let theme = &self.opts.theme;
        let mut font = skia::Font::default();
        font.set_size(16.0);

        canvas.save();
        canvas.translate((group.transform.translate.x as f32, group.transform.translate.y as f32));
        if let Some(deg) = group.transform.rotate_deg {
            canvas.rotate(deg as f32, None);
        }
        for label in group.selector.labels() {
            let c = if label.active { theme.label_active } else { theme.label_inactive };
            let paint = text_paint(c);
            let y = label.attribute.label_offset() as f32;
            draw_text(canvas, label.attribute.title(), 0.0, y, &font, &paint, Anchor::Middle);
        }
        canvas.restore();
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, anchor: Point, lines: &[&str]) {
        let theme = &self.opts.theme;
        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(color(theme.tooltip_fill));
        let rect = skia::Rect::from_xywh(
            anchor.x as f32,
            anchor.y as f32,
            TOOLTIP_WIDTH as f32,
            TOOLTIP_HEIGHT as f32,
        );
        canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

        if !self.opts.draw_labels {
            return;
        }
        let mut font = skia::Font::default();
        font.set_size(12.0);
        let paint = text_paint(theme.tooltip_text);
        for (i, line) in lines.iter().enumerate() {
            let y = anchor.y as f32 + 18.0 + i as f32 * 17.0;
            draw_text(canvas, line, anchor.x as f32 + 6.0, y, &font, &paint, Anchor::Start);
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn text_paint(c: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_color(color(c));
    p
}

fn draw_text(
    canvas: &skia::Canvas,
    text: &str,
    x: f32,
    y: f32,
    font: &skia::Font,
    paint: &skia::Paint,
    anchor: Anchor,
) {
    let x = match anchor {
        Anchor::Start => x,
        Anchor::Middle | Anchor::End => {
            let (w, _) = font.measure_str(text, Some(paint));
            if matches!(anchor, Anchor::Middle) { x - w * 0.5 } else { x - w }
        }
    };
    canvas.draw_str(text, (x, y), font, paint);
}
