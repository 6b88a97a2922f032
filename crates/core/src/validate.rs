//! Primitive validators and coercion helpers.
//!
//! Every function here is pure and stateless: a raw attribute string goes
//! in, a validated typed value (or `None`) comes out. Parent entities build
//! their field rules out of these, so each one is unit-testable on its own.

use serde::{Deserialize, Serialize};

// ── Numeric gates ───────────────────────────────────────────────────

/// Integer parse with an inclusive domain range.
pub fn parse_u32_in(raw: &str, min: u32, max: u32) -> Option<u32> {
    let v: u32 = raw.trim().parse().ok()?;
    (min..=max).contains(&v).then_some(v)
}

/// Float parse with an inclusive domain range, truncated to the field's
/// decimal precision (round half away from zero).
pub fn parse_f64_in(raw: &str, min: f64, max: f64, places: u32) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    if !v.is_finite() || v < min || v > max {
        return None;
    }
    Some(round_to(v, places))
}

/// Round half away from zero at a fixed number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Fixed-precision text for a normalized float. The emitted form is the
/// exact form the numeric gates re-accept.
pub fn format_f64(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, value)
}

/// Clamps an out-of-order min/max pair: a minimum above the maximum is
/// pulled down to it, so an inverted pair is never emitted.
pub fn order_bounds(min: Option<u32>, max: Option<u32>) -> (Option<u32>, Option<u32>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(hi)),
        pair => pair,
    }
}

// ── Booleans ────────────────────────────────────────────────────────

/// Exact `"true"`/`"false"`, case-sensitive. No fallback coercion.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_owned()
}

// ── Identifiers and lists ───────────────────────────────────────────

/// Non-empty after trimming, returned trimmed.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Canonical lowercase-with-underscores rewrite of a free-text identifier.
/// Spaces, hyphens, and upper-case word boundaries all become a single
/// underscore: `"River Camp"` and `"RiverCamp"` both map to `"river_camp"`.
pub fn snake_case(raw: &str) -> Option<String> {
    let trimmed = non_empty(raw)?;
    let mut out = String::with_capacity(trimmed.len());
    let mut prev_sep = true;
    let mut prev_lower = false;
    for ch in trimmed.chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !prev_sep {
                out.push('_');
            }
            prev_sep = true;
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !prev_sep {
                out.push('_');
            }
            for low in ch.to_lowercase() {
                out.push(low);
            }
            prev_sep = false;
            prev_lower = false;
        } else {
            out.push(ch);
            prev_sep = false;
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    non_empty(&out).map(str::to_owned)
}

/// Splits a space-delimited list, deduplicates preserving first-seen order,
/// and keeps only entries the closed-set parser accepts.
pub fn word_list<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T>
where
    T: PartialEq + Copy,
{
    let mut out: Vec<T> = Vec::new();
    for word in raw.split_whitespace() {
        if let Some(v) = parse(word) {
            if !out.contains(&v) {
                out.push(v);
            }
        }
    }
    out
}

// ── Coordinates ─────────────────────────────────────────────────────

/// A map-space coordinate pair, both axes in [0, 1] at two places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

/// Parses `"x y"` with both axes range-gated independently.
pub fn parse_coord(raw: &str) -> Option<Coord> {
    let mut parts = raw.split_whitespace();
    let x = parse_f64_in(parts.next()?, 0.0, 1.0, 2)?;
    let y = parse_f64_in(parts.next()?, 0.0, 1.0, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord { x, y })
}

pub fn format_coord(c: Coord) -> String {
    format!("{} {}", format_f64(c.x, 2), format_f64(c.y, 2))
}
