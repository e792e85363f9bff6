/// Number of whole cells that fit in the viewport.
///
/// An infinitely wide viewport fits every cell (`usize::MAX`); a NaN width fits none.
pub fn cells_per_viewport(viewport_width: f32, cell_width: f32) -> usize {
    if cell_width <= 0.0 || viewport_width.is_nan() {
        return 0;
    }
    // Saturating float-to-int cast: negative widths map to 0, +inf to usize::MAX.
    (viewport_width / cell_width) as usize
}

/// The largest cell index the strip can rest on without leaving the viewport partially empty.
pub fn max_index(cell_count: usize, cells_per_viewport: usize) -> usize {
    cell_count.saturating_sub(cells_per_viewport)
}

/// Maps an unbounded actual index into `[0, count)`.
///
/// Returns `0` for an empty collection.
pub fn normalize_index(actual: i64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    actual.rem_euclid(count as i64) as usize
}

/// Applies the clamp/wrap policy to a proposed cell index.
///
/// Wrapping only applies when the content overflows the viewport (`max_index > 0`) and keeps
/// the proposal within one turn past either end; otherwise the proposal is clamped to
/// `[0, max_index]`.
pub(crate) fn resolve(
    proposed: i64,
    max_index: usize,
    cell_count: usize,
    wrap_around: bool,
) -> i64 {
    if wrap_around && max_index > 0 {
        fold_into_turn(proposed, max_index, cell_count)
    } else {
        proposed.clamp(0, i64::try_from(max_index).unwrap_or(i64::MAX))
    }
}

/// Brings a wrapping proposal to within one turn of the strip past either end.
///
/// Whole turns are dropped, so the result is congruent to `proposed` modulo `cell_count` and
/// lies in `[-cell_count, max_index + cell_count]` on the same side of `[0, max_index]`.
pub(crate) fn fold_into_turn(proposed: i64, max_index: usize, cell_count: usize) -> i64 {
    let Ok(count) = i64::try_from(cell_count) else {
        return proposed;
    };
    let max = i64::try_from(max_index).unwrap_or(i64::MAX);
    if count == 0 {
        proposed
    } else if proposed < 0 {
        -((-1 - proposed) % count) - 1
    } else if proposed > max {
        max + (proposed - max - 1) % count + 1
    } else {
        proposed
    }
}
