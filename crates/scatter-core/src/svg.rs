// File: crates/scatter-core/src/svg.rs
// Summary: Serialize a Scene into a standalone SVG document (d3-axis style rulers, classed elements).

use std::fmt::{self, Write};
use std::path::Path;

use crate::axis::AxisId;
use crate::error::Result;
use crate::scene::{AxisRuler, LabelGroup, Scene, TICK_PADDING, TICK_SIZE};
use crate::theme::Theme;
use crate::tooltip::escape;

/// Tooltip box size, pixels.
pub const TOOLTIP_WIDTH: f64 = 170.0;
pub const TOOLTIP_HEIGHT: f64 = 64.0;

pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::with_capacity(512 + scene.marks.len() * 160);
    // fmt::Write on String cannot fail.
    let _ = write_scene(&mut out, scene, theme);
    out
}

/// Write the SVG document for `scene` to `path`, creating parent directories.
pub fn render_to_svg(scene: &Scene, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(scene, theme))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn write_scene(out: &mut String, scene: &Scene, theme: &Theme) -> fmt::Result {
    let (w, h) = (num(scene.surface.width), num(scene.surface.height));
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="chart">"#
    )?;
    write_style(out, theme)?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background)?;

    write_labels(out, &scene.x_labels)?;
    write_labels(out, &scene.y_labels)?;
    write_axis(out, &scene.x_axis)?;
    write_axis(out, &scene.y_axis)?;

    for mark in &scene.marks {
        let c = &mark.circle;
        let stroke = if c.highlighted { theme.circle_stroke_hover } else { theme.circle_stroke };
        writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" class="{}" style="stroke: {}"/>"#,
            num(c.cx),
            num(c.cy),
            num(c.r),
            escape(&mark.circle_class()),
            stroke
        )?;
    }
    for mark in &scene.marks {
        let t = &mark.text;
        writeln!(
            out,
            r#"<text dx="{}" dy="{}" font-size="{}" class="stateText">{}</text>"#,
            num(t.dx),
            num(t.dy),
            num(t.font_size),
            escape(&mark.abbr)
        )?;
    }

    if let Some(tip) = &scene.tooltip {
        writeln!(
            out,
            r#"<foreignObject x="{}" y="{}" width="{TOOLTIP_WIDTH}" height="{TOOLTIP_HEIGHT}" class="d3-tip"><div xmlns="http://www.w3.org/1999/xhtml">{}</div></foreignObject>"#,
            num(tip.anchor.x),
            num(tip.anchor.y),
            tip.tooltip.html()
        )?;
    }
    writeln!(out, "</svg>")
}

fn write_style(out: &mut String, theme: &Theme) -> fmt::Result {
    writeln!(out, "<style>")?;
    writeln!(out, ".stateCircle {{ fill: {}; stroke-width: 1; }}", theme.circle_fill)?;
    writeln!(
        out,
        ".stateText {{ font-family: sans-serif; font-weight: bold; fill: {}; text-anchor: middle; pointer-events: none; }}",
        theme.state_text
    )?;
    writeln!(out, ".aText {{ font-family: sans-serif; font-size: 16px; text-anchor: middle; cursor: pointer; }}")?;
    writeln!(out, ".active {{ font-weight: bold; fill: {}; }}", theme.label_active)?;
    writeln!(out, ".inactive {{ fill: {}; }}", theme.label_inactive)?;
    writeln!(out, ".xAxis, .yAxis {{ color: {}; }}", theme.axis_line)?;
    writeln!(out, ".tick text {{ fill: {}; }}", theme.tick_label)?;
    writeln!(
        out,
        ".d3-tip div {{ font-family: sans-serif; font-size: 12px; padding: 6px; border-radius: 4px; background: rgba({}, {}, {}, {:.2}); color: {}; }}",
        theme.tooltip_fill.r,
        theme.tooltip_fill.g,
        theme.tooltip_fill.b,
        theme.tooltip_fill.opacity(),
        theme.tooltip_text
    )?;
    writeln!(out, "</style>")
}

fn write_labels(out: &mut String, group: &LabelGroup) -> fmt::Result {
    writeln!(out, r#"<g class="{}" transform="{}">"#, group.class(), group.transform)?;
    for label in group.selector.labels() {
        writeln!(
            out,
            r#"  <text y="{}" data-name="{}" data-axis="{}" class="{}">{}</text>"#,
            num(label.attribute.label_offset()),
            label.attribute,
            label.axis(),
            label.class(),
            escape(label.attribute.title())
        )?;
    }
    writeln!(out, "</g>")
}

fn write_axis(out: &mut String, ruler: &AxisRuler) -> fmt::Result {
    let anchor = match ruler.axis {
        AxisId::X => "middle",
        AxisId::Y => "end",
    };
    writeln!(
        out,
        r#"<g class="{}" transform="{}" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#,
        ruler.class(),
        ruler.transform
    )?;
    writeln!(out, r#"  <path class="domain" stroke="currentColor" d="{}"/>"#, ruler.domain_path())?;
    let gap = TICK_SIZE + TICK_PADDING;
    for tick in ruler.ticks() {
        let pos = num(tick.offset);
        match ruler.axis {
            AxisId::X => writeln!(
                out,
                r#"  <g class="tick" transform="translate({pos},0)"><line stroke="currentColor" y2="{TICK_SIZE}"/><text fill="currentColor" y="{gap}" dy="0.71em">{}</text></g>"#,
                escape(&tick.label)
            )?,
            AxisId::Y => writeln!(
                out,
                r#"  <g class="tick" transform="translate(0,{pos})"><line stroke="currentColor" x2="-{TICK_SIZE}"/><text fill="currentColor" x="-{gap}" dy="0.32em">{}</text></g>"#,
                escape(&tick.label)
            )?,
        }
    }
    writeln!(out, "</g>")
}

/// Attribute number: at most three decimals, no negative zero.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "NaN".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{r}")
}
