//! Employment window resolution.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::PersonSnapshot;

/// Resolves the contiguous employment interval of a person as of a date.
///
/// Contracts active on `as_of` are fused into one window: the earliest start
/// and the latest end over exactly those contracts. Past or future contracts
/// never extend the window, even where they would otherwise widen the range.
///
/// When no contract is active on `as_of` (between semesters, say), the
/// resolver falls back to the single contract with the latest end date
/// overall and returns its own `[start, end]`. The two branches are
/// deliberately asymmetric - a union of simultaneously active contracts
/// versus one last-known contract - and callers must not assume a single
/// definition covers both.
///
/// # Errors
///
/// [`EngineError::NoActiveOrPastContract`] when the person has no contracts
/// at all.
pub fn employment_window(
    snapshot: &PersonSnapshot,
    as_of: NaiveDate,
) -> EngineResult<(NaiveDate, NaiveDate)> {
    let fused = snapshot
        .contracts
        .iter()
        .filter(|contract| contract.is_active_on(as_of))
        .fold(None, |window, contract| match window {
            None => Some((contract.start, contract.end)),
            Some((start, end)) => Some((start.min(contract.start), end.max(contract.end))),
        });
    if let Some(window) = fused {
        return Ok(window);
    }

    let last = snapshot
        .contracts
        .iter()
        .max_by_key(|contract| contract.end)
        .ok_or_else(|| EngineError::NoActiveOrPastContract {
            person: snapshot.person.clone(),
        })?;
    Ok((last.start, last.end))
}
