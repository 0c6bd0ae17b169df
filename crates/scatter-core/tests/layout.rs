// File: crates/scatter-core/tests/layout.rs
// Purpose: Width breakpoints, resize behavior, initial placement, and tooltip content.

mod common;

use scatter_core::{circle_radius, tick_count, Attribute, AxisId, ChartEvent, ChartRenderer, Point};

#[test]
fn radius_breakpoint_at_530() {
    assert_eq!(circle_radius(529.0), 5.0);
    assert_eq!(circle_radius(530.0), 5.0);
    assert_eq!(circle_radius(531.0), 10.0);
}

#[test]
fn tick_breakpoint_at_500() {
    assert_eq!(tick_count(499.0), 5);
    assert_eq!(tick_count(500.0), 5);
    assert_eq!(tick_count(501.0), 10);
}

#[test]
fn scale_ranges_follow_margins_and_label_area() {
    let r = ChartRenderer::initialize(common::sample(), 780.0);
    let s = r.surface();
    assert!(common::approx(s.height, 580.0));
    assert_eq!(r.scale(AxisId::X).range, (130.0, 760.0));
    assert_eq!(r.scale(AxisId::Y).range, (450.0, 20.0));
    assert_eq!(r.scene().x_axis.transform.to_string(), "translate(0, 450)");
    assert_eq!(r.scene().y_axis.transform.to_string(), "translate(130, 0)");
    assert_eq!(r.scene().x_labels.transform.to_string(), "translate(445, 520)");
    assert_eq!(r.scene().y_labels.transform.to_string(), "translate(60, 235)rotate(-90)");
}

#[test]
fn alabama_example_placement_and_tooltip() {
    let mut r = ChartRenderer::initialize(common::alabama(), 960.0);
    let mark = &r.scene().marks[0];
    assert_eq!(mark.abbr, "AL");
    assert_eq!(mark.circle_class(), "stateCircle AL");
    assert_eq!(mark.circle.cx, r.scale(AxisId::X).apply(18.7));
    assert_eq!(mark.circle.cy, r.scale(AxisId::Y).apply(32.8));

    let tip = r.hover(0).unwrap();
    assert_eq!(tip.tooltip.to_string(), "Alabama poverty: 18.7% obesity: 32.8%");
    assert_eq!(
        tip.tooltip.html(),
        "<div>Alabama</div><div>poverty: 18.7%</div><div>obesity: 32.8%</div>"
    );
    assert!(r.scene().marks[0].circle.highlighted);

    r.unhover(0).unwrap();
    assert!(r.scene().tooltip.is_none());
    assert!(!r.scene().marks[0].circle.highlighted);
}

#[test]
fn tooltip_groups_non_poverty_x_values() {
    let mut r = ChartRenderer::initialize(common::alabama(), 960.0);
    r.select_axis(AxisId::X, Attribute::Income).unwrap();
    r.select_axis(AxisId::Y, Attribute::Smokes).unwrap();
    let tip = r.hover(0).unwrap();
    assert_eq!(tip.tooltip.to_string(), "Alabama income: 43,200 smokes: 21%");

    r.select_axis(AxisId::X, Attribute::Age).unwrap();
    let tip = r.hover(0).unwrap();
    assert_eq!(tip.tooltip.x_line, "age: 38");
}

#[test]
fn tooltip_sits_at_offset_from_circle_top() {
    let mut r = ChartRenderer::initialize(common::alabama(), 960.0);
    let c = r.scene().marks[0].circle;
    let tip = r.hover(0).unwrap();
    assert_eq!(tip.anchor, Point::new(c.cx - 60.0, c.cy - c.r + 40.0));
}

#[test]
fn hover_unknown_record_is_an_error() {
    let mut r = ChartRenderer::initialize(common::alabama(), 960.0);
    assert!(r.hover(7).is_err());
    assert!(r.unhover(7).is_err());
}

#[test]
fn resize_600_to_500_shrinks_radius_and_ticks_together() {
    let mut r = ChartRenderer::initialize(common::sample(), 600.0);
    assert_eq!(r.circle_radius(), 10.0);
    assert_eq!(r.tick_count(), 10);
    assert_eq!(r.scene().x_axis.tick_count, 10);
    assert_eq!(r.scene().y_axis.tick_count, 10);

    r.handle_event(ChartEvent::Resize { container_width: 500.0 }).unwrap();
    assert_eq!(r.circle_radius(), 5.0);
    assert_eq!(r.tick_count(), 5);
    assert_eq!(r.scene().x_axis.tick_count, 5);
    assert_eq!(r.scene().y_axis.tick_count, 5);
    for mark in &r.scene().marks {
        assert_eq!(mark.circle.r, 5.0);
        assert_eq!(mark.text.font_size, 5.0);
    }
}

#[test]
fn resize_repositions_without_animation() {
    let ds = common::sample();
    let mut r = ChartRenderer::initialize(ds.clone(), 960.0);
    r.select_axis(AxisId::Y, Attribute::Smokes).unwrap();
    r.advance_to(120.0);
    assert!(r.is_animating());

    r.resize(640.0);
    assert!(!r.is_animating());
    assert_eq!(r.scale(AxisId::X).range, (130.0, 620.0));
    for (mark, rec) in r.scene().marks.iter().zip(ds.records()) {
        assert!(common::approx(mark.circle.cx, r.scale(AxisId::X).apply(rec.poverty)));
        assert!(common::approx(mark.circle.cy, r.scale(AxisId::Y).apply(rec.smokes)));
    }
    assert_eq!(r.scene().y_axis.scale, *r.scale(AxisId::Y));
}

#[test]
fn resize_keeps_hovered_tooltip_attached() {
    let mut r = ChartRenderer::initialize(common::sample(), 960.0);
    r.hover(3).unwrap();
    r.resize(520.0);
    let c = r.scene().marks[3].circle;
    assert!(c.highlighted);
    let tip = r.scene().tooltip.as_ref().unwrap();
    assert_eq!(tip.index, 3);
    assert_eq!(tip.anchor, Point::new(c.cx - 60.0, c.cy - c.r + 40.0));
}

#[test]
fn pointer_move_picks_and_switches_hover() {
    let mut r = ChartRenderer::initialize(common::sample(), 960.0);
    let ca = r.scene().marks[4].circle;
    r.handle_event(ChartEvent::PointerMove(Point::new(ca.cx + 1.0, ca.cy))).unwrap();
    assert_eq!(r.hovered(), Some(4));
    assert!(r.scene().marks[4].circle.highlighted);

    r.handle_event(ChartEvent::PointerMove(Point::new(1.0, 1.0))).unwrap();
    assert_eq!(r.hovered(), None);
    assert!(r.scene().tooltip.is_none());
    assert!(!r.scene().marks[4].circle.highlighted);
}

#[test]
fn overlapping_hover_keeps_single_highlight_and_tooltip() {
    let mut r = ChartRenderer::initialize(common::sample(), 960.0);
    r.handle_event(ChartEvent::MouseOver(0)).unwrap();
    r.handle_event(ChartEvent::MouseOver(1)).unwrap();
    let highlighted: Vec<bool> = r.scene().marks.iter().map(|m| m.circle.highlighted).collect();
    assert_eq!(highlighted, vec![false, true, false, false, false]);

    // Leaving the earlier record must not hide the current tooltip.
    r.handle_event(ChartEvent::MouseOut(0)).unwrap();
    assert_eq!(r.hovered(), Some(1));
    assert!(r.scene().marks[1].circle.highlighted);
    assert_eq!(r.scene().tooltip.as_ref().map(|t| t.index), Some(1));

    r.resize(520.0);
    assert_eq!(r.scene().tooltip.as_ref().map(|t| t.index), Some(1));

    r.handle_event(ChartEvent::MouseOut(1)).unwrap();
    assert_eq!(r.hovered(), None);
    assert!(r.scene().tooltip.is_none());
    assert!(r.scene().marks.iter().all(|m| !m.circle.highlighted));
}
