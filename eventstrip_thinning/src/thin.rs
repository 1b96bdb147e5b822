// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marker-centered thinning pass.

use alloc::vec::Vec;

use crate::result::ThinningResult;

/// Reduces an over-budget candidate slice to at most `cap` events.
///
/// `events` are the candidates inside the visible window, sorted ascending
/// by timestamp with ties broken by a stable per-event key; `positions` are
/// their matching non-decreasing strip coordinates; `now_position` is the
/// marker's coordinate.
///
/// When the input already fits the budget it is returned whole. Otherwise
/// the pass keeps a reserved window around the marker (40% of `cap`, ideally
/// 20% strictly before it), fills the rest of the budget with upcoming
/// events soonest-first, and gives whatever remains to the most recent past
/// events. Shortfall on one side of the marker is absorbed by the other, so
/// the selection length is always `min(cap, events.len())`.
///
/// Both output lists are chronological, and the function is deterministic:
/// identical arguments produce identical output.
#[must_use]
pub fn thin<T: Clone>(
    events: &[T],
    positions: &[f64],
    cap: usize,
    now_position: f64,
) -> ThinningResult<T> {
    debug_assert_eq!(
        events.len(),
        positions.len(),
        "events and positions must be parallel slices"
    );
    debug_assert!(
        positions.windows(2).all(|w| w[0] <= w[1]),
        "positions must be sorted non-decreasing"
    );

    let n = events.len();
    if n <= cap {
        return ThinningResult {
            selected: events.to_vec(),
            discarded: Vec::new(),
        };
    }

    // Everything strictly before the marker is "past"; the event at the
    // marker coordinate itself counts as "at or after".
    let split = positions.partition_point(|&p| p < now_position);
    let before_len = split;
    let after_len = n - split;

    // Reserved window around the marker: 40% of the budget, ideally split as
    // 20% strictly before the marker and the rest at or after it. A side
    // with too little history or future hands its shortfall to the other, so
    // the reserved window's actual size is min(reserved, n).
    let reserved = cap * 2 / 5;
    let ideal_after = reserved - cap / 5;

    let mut take_after = ideal_after.min(after_len);
    let take_before = (reserved - take_after).min(before_len);
    take_after = (reserved - take_before).min(after_len);

    // Remaining budget, future-first: upcoming events nearest the reserved
    // window (soonest first), then past events nearest it (most recent
    // first).
    let quota = cap - take_before - take_after;
    let future_taken = quota.min(after_len - take_after);
    let past_taken = (quota - future_taken).min(before_len - take_before);

    let lo = split - take_before - past_taken;
    let hi = split + take_after + future_taken;

    let mut selected_indices: Vec<usize> = (lo..hi).collect();
    if selected_indices.len() > cap {
        // The arithmetic above cannot overshoot the budget, but a selection
        // larger than `cap` would break the renderer's contract, so guard
        // anyway.
        decimate_alternating(&mut selected_indices, cap, split);
    }

    let mut selected = Vec::with_capacity(selected_indices.len());
    let mut discarded = Vec::with_capacity(n - selected_indices.len());
    let mut next = selected_indices.iter().copied().peekable();
    for (index, event) in events.iter().enumerate() {
        if next.peek() == Some(&index) {
            next.next();
            selected.push(event.clone());
        } else {
            discarded.push(event.clone());
        }
    }

    ThinningResult {
        selected,
        discarded,
    }
}

/// Shrinks `indices` to at most `cap` entries by alternating removal.
///
/// Walks the pre-marker run (`index < split`) from the oldest end dropping
/// every second entry, then the at-or-after run from the newest end the same
/// way, repeating until the budget is met. `indices` must be sorted
/// ascending and stays sorted.
fn decimate_alternating(indices: &mut Vec<usize>, cap: usize, split: usize) {
    while indices.len() > cap {
        let mut excess = indices.len() - cap;

        // Every second pre-marker entry, oldest first.
        let mut drop_next = true;
        indices.retain(|&index| {
            if excess == 0 || index >= split {
                return true;
            }
            let drop = drop_next;
            drop_next = !drop_next;
            if drop {
                excess -= 1;
            }
            !drop
        });

        // Every second at-or-after entry, newest first.
        if excess > 0 {
            let mut dropped = alloc::vec![false; indices.len()];
            let mut drop_next = true;
            for j in (0..indices.len()).rev() {
                if excess == 0 || indices[j] < split {
                    break;
                }
                if drop_next {
                    dropped[j] = true;
                    excess -= 1;
                }
                drop_next = !drop_next;
            }
            let mut j = 0;
            indices.retain(|_| {
                let keep = !dropped[j];
                j += 1;
                keep
            });
        }
    }
}
