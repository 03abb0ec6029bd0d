//! Wheel layout math shared by the canvas and SVG renderers.
//!
//! Angles are wheel-local degrees measured clockwise from 12 o'clock. A
//! positive rotation turns the wheel clockwise on screen, so a local angle
//! `a` is drawn at screen angle `a + rotation`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARC_EPSILON_DEG, GOLDEN_ANGLE_DEG, NEUTRAL_SEGMENT_COLOR, SEGMENT_LIGHTNESS,
    SEGMENT_SATURATION,
};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    Neutral,
    Hue(u16),
}

impl SegmentFill {
    pub fn css(&self) -> String {
        match self {
            SegmentFill::Neutral => NEUTRAL_SEGMENT_COLOR.to_string(),
            SegmentFill::Hue(hue) => {
                format!("hsl({} {}% {}%)", hue, SEGMENT_SATURATION, SEGMENT_LIGHTNESS)
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelSegment {
    /// Position in the entry list, `None` for the placeholder of an empty wheel.
    pub entry_index: Option<usize>,
    pub start_deg: f64,
    pub end_deg: f64,
    pub fill: SegmentFill,
}

impl WheelSegment {
    pub fn span_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Golden-angle hue for the segment at `index`.
pub fn segment_hue(index: usize) -> u16 {
    let hue = ((index as f64 * GOLDEN_ANGLE_DEG) % 360.0).round() as u16;
    hue % 360
}

pub fn segment_color(index: usize) -> String {
    SegmentFill::Hue(segment_hue(index)).css()
}

pub fn slice_angle(count: usize) -> f64 {
    if count == 0 {
        360.0
    } else {
        360.0 / count as f64
    }
}

pub fn build_segments(count: usize) -> Vec<WheelSegment> {
    if count == 0 {
        return vec![WheelSegment {
            entry_index: None,
            start_deg: 0.0,
            end_deg: 360.0,
            fill: SegmentFill::Neutral,
        }];
    }

    let slice = slice_angle(count);
    (0..count)
        .map(|index| WheelSegment {
            entry_index: Some(index),
            start_deg: index as f64 * slice,
            end_deg: if index + 1 == count { 360.0 } else { (index + 1) as f64 * slice },
            fill: SegmentFill::Hue(segment_hue(index)),
        })
        .collect()
}

/// Label font size in pixels, shrinking in six steps as the wheel fills up.
pub fn label_font_px(count: usize) -> u32 {
    match count {
        0..=4 => 18,
        5..=8 => 16,
        9..=12 => 14,
        13..=20 => 12,
        21..=32 => 10,
        _ => 8,
    }
}

pub fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let kept: String = name.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// How many characters of a `font_px` label fit along `span_deg` of arc at
/// `radius`, assuming glyphs average 0.6em wide.
pub fn fit_label_chars(span_deg: f64, radius: f64, font_px: u32) -> usize {
    let arc_length = radius * span_deg.to_radians();
    let glyph = f64::from(font_px) * 0.6;
    ((arc_length / glyph).floor() as usize).max(1)
}

/// Point on a circle of `radius` around (`cx`, `cy`) at wheel-local `angle_deg`.
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    (cx + radius * radians.sin(), cy - radius * radians.cos())
}

/// Closed SVG wedge path for a segment.
pub fn wedge_path(segment: &WheelSegment, cx: f64, cy: f64, radius: f64) -> String {
    if segment.span_deg() >= 360.0 {
        // A single arc cannot describe a full circle.
        return format!(
            "M {cx} {top} A {radius} {radius} 0 1 1 {cx} {bottom} A {radius} {radius} 0 1 1 {cx} {top} Z",
            top = cy - radius,
            bottom = cy + radius,
        );
    }
    let (x1, y1) = polar_point(cx, cy, radius, segment.start_deg);
    let (x2, y2) = polar_point(cx, cy, radius, segment.end_deg);
    let large_arc = u8::from(segment.span_deg() > 180.0);
    format!("M {cx} {cy} L {x1:.3} {y1:.3} A {radius} {radius} 0 {large_arc} 1 {x2:.3} {y2:.3} Z")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelArc {
    pub path: String,
    pub direction: ArcDirection,
}

/// Arc for a curved label, reversed in the lower half so the text never
/// reads upside-down.
pub fn label_arc(segment: &WheelSegment, cx: f64, cy: f64, radius: f64) -> LabelArc {
    let start = segment.start_deg;
    let end = segment.end_deg - ARC_EPSILON_DEG;
    let large_arc = u8::from(end - start > 180.0);
    let mid = segment.mid_deg();
    let flipped = mid > 90.0 && mid < 270.0;

    let (from, to, sweep, direction) = if flipped {
        (end, start, 0, ArcDirection::CounterClockwise)
    } else {
        (start, end, 1, ArcDirection::Clockwise)
    };
    let (x1, y1) = polar_point(cx, cy, radius, from);
    let (x2, y2) = polar_point(cx, cy, radius, to);

    LabelArc {
        path: format!("M {x1:.3} {y1:.3} A {radius} {radius} 0 {large_arc} {sweep} {x2:.3} {y2:.3}"),
        direction,
    }
}

/// Index of the segment under a fixed pointer once the wheel has turned by
/// `rotation_deg`.
pub fn pointer_segment(rotation_deg: f64, count: usize, pointer_deg: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let local = (pointer_deg - rotation_deg).rem_euclid(360.0);
    let index = (local / slice_angle(count)).floor() as usize;
    Some(index.min(count - 1))
}

// Modified ease-out: 1 - (1-t)^4
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

pub fn tween(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * ease_out(progress)
}
