//! Best-mark selection and output row assembly.

use crate::core::config::{MarkKind, ScanConfig, TargetEvent};
use crate::core::schema::{Performance, Triple, TripleRow};
use crate::mark::{format_mark, parse_field_mark, parse_mark};
use crate::{ScanError, ScanResult};

/// Resolve one event's performances to a single representative mark.
///
/// A single performance passes its raw mark through unmodified. Multiple
/// performances (an event run in prelims and finals) are compared by the
/// event's measurement kind: times take the numeric minimum and are
/// re-emitted in canonical form; field marks take the numeric maximum and
/// keep the winning raw string, since the time codec has no business with
/// heights.
pub fn resolve_mark(performances: &[&Performance], event: &TargetEvent) -> ScanResult<String> {
    match performances {
        [] => Err(ScanError::Message(format!(
            "qualifying record has no performance for event {}",
            event.code
        ))),
        [only] => Ok(only.mark.clone()),
        many => match event.kind {
            MarkKind::Time => {
                let mut best = f64::INFINITY;
                for perf in many {
                    let secs = parse_mark(&perf.mark)?;
                    if secs < best {
                        best = secs;
                    }
                }
                Ok(format_mark(best))
            }
            MarkKind::Field => {
                let mut best: Option<&Performance> = None;
                let mut best_value = f64::NEG_INFINITY;
                for &perf in many {
                    let value = parse_field_mark(&perf.mark)?;
                    if value > best_value {
                        best_value = value;
                        best = Some(perf);
                    }
                }
                // Non-empty slice guarantees a winner.
                Ok(best.map(|p| p.mark.clone()).unwrap_or_default())
            }
        },
    }
}

/// Assemble the fixed-column output row for a qualifying record.
///
/// Event columns follow the configured target order. A target event with no
/// performance in the record is a broken detector invariant and fails
/// loudly rather than emitting an empty column.
pub fn assemble_row(triple: &Triple, config: &ScanConfig) -> ScanResult<TripleRow> {
    let first = triple.performances.first().ok_or_else(|| {
        ScanError::Message(format!(
            "qualifying record for athlete {} at meet {} has no performances",
            triple.athlete_id, triple.meet.id
        ))
    })?;

    let mut marks = Vec::with_capacity(config.target_events.len());
    for event in &config.target_events {
        let event_perfs: Vec<&Performance> = triple
            .performances
            .iter()
            .filter(|p| p.event_code == event.code)
            .collect();
        marks.push(resolve_mark(&event_perfs, event)?);
    }

    Ok(TripleRow {
        name: first.display_name(),
        gender: first.gender.clone(),
        meet_name: triple.meet.name.clone(),
        date: triple.meet.date.clone(),
        year: triple.partition.year,
        url: config.results_url(&triple.meet.id),
        marks,
    })
}
