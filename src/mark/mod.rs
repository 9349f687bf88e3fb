//! Mark codec: conversion between raw time-mark strings and seconds.
//!
//! Source feeds record times as clock-like strings with optional annotation
//! suffixes (`12.34h`, `11.80w`) and parenthesized split annotations
//! (`58.21 (27.9)`). `parse_mark` normalizes those to seconds for numeric
//! comparison; `format_mark` renders seconds back to the canonical
//! `[H:][MM:]SS.ff` form. Round-tripping a canonical string reproduces it
//! exactly.

use crate::{ScanError, ScanResult};

/// Literal annotation substrings stripped before parsing: hand timing,
/// wind markers, exhibition.
const ANNOTATIONS: [&str; 4] = ["NWI", "h", "w", "x"];

/// Strip parenthesized tails and annotation substrings from a raw mark.
fn strip_annotations(raw: &str) -> String {
    let mut s = match raw.find('(') {
        Some(idx) => raw[..idx].trim().to_string(),
        None => raw.trim().to_string(),
    };
    for ann in ANNOTATIONS {
        s = s.replace(ann, "");
    }
    s.trim().to_string()
}

fn parse_group(group: &str, raw: &str) -> ScanResult<u64> {
    group
        .parse::<u64>()
        .map_err(|_| ScanError::Message(format!("unparseable mark {raw:?}: bad group {group:?}")))
}

/// Parse a raw time-mark string into seconds.
///
/// Accepts `SS.ff`, `M:SS.ff`, and `H:MM:SS.ff` shapes after annotation
/// stripping. Fractional digits are carried over verbatim rather than
/// computed in floating point. Anything else is an explicit error, including
/// 4+ colon groups.
pub fn parse_mark(raw: &str) -> ScanResult<f64> {
    let cleaned = strip_annotations(raw);
    if cleaned.is_empty() {
        return Err(ScanError::Message(format!("unparseable mark {raw:?}: empty after stripping")));
    }

    let (int_part, frac_part) = match cleaned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (cleaned.as_str(), None),
    };

    let groups: Vec<&str> = int_part.split(':').collect();
    let whole: u64 = match groups.as_slice() {
        &[s] => parse_group(s, raw)?,
        &[m, s] => parse_group(m, raw)? * 60 + parse_group(s, raw)?,
        &[h, m, s] => {
            parse_group(h, raw)? * 3600 + parse_group(m, raw)? * 60 + parse_group(s, raw)?
        }
        _ => {
            return Err(ScanError::Message(format!(
                "unparseable mark {raw:?}: {} colon groups",
                groups.len()
            )));
        }
    };

    let rendered = match frac_part {
        Some(frac) if !frac.is_empty() => format!("{whole}.{frac}"),
        _ => whole.to_string(),
    };
    rendered
        .parse::<f64>()
        .map_err(|_| ScanError::Message(format!("unparseable mark {raw:?}")))
}

/// Render seconds in the canonical `[H:][MM:]SS.ff` form.
///
/// Rounds to the nearest 0.01 and always emits exactly two fractional
/// digits.
pub fn format_mark(seconds: f64) -> String {
    let centis = (seconds * 100.0).round() as u64;
    let whole = centis / 100;
    let frac = centis % 100;

    if whole < 60 {
        return format!("{whole}.{frac:02}");
    }

    let hours = whole / 3600;
    let rem = whole % 3600;
    let minutes = rem / 60;
    let secs = rem % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}.{frac:02}")
    } else if minutes > 0 {
        format!("{minutes}:{secs:02}.{frac:02}")
    } else {
        format!("{secs}.{frac:02}")
    }
}

/// Parse a field-event mark (height or distance) as a plain decimal.
///
/// Same annotation stripping as times, but no clock-group handling; field
/// marks never carry colons.
pub fn parse_field_mark(raw: &str) -> ScanResult<f64> {
    let cleaned = strip_annotations(raw);
    if cleaned.is_empty() || cleaned.contains(':') {
        return Err(ScanError::Message(format!("unparseable field mark {raw:?}")));
    }
    cleaned
        .parse::<f64>()
        .map_err(|_| ScanError::Message(format!("unparseable field mark {raw:?}")))
}
