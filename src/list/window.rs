/// Choose the `[start, end)` slice of a list to show in a viewport.
///
/// The cursor is kept centered where possible and the window is shifted back
/// inside `[0, total]` near the edges; `end - start` is always
/// `min(height, total)`.
#[must_use]
pub fn visible_range(cursor: usize, total: usize, height: usize) -> (usize, usize) {
	if total <= height {
		return (0, total);
	}

	let mut start = cursor.saturating_sub(height / 2);
	let mut end = start + height;
	if end > total {
		end = total;
		start = end - height;
	}
	(start, end)
}
