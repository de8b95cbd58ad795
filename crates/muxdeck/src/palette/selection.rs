//! Highlighted-row arithmetic for the visible list

/// Index after moving down; stops at the last row
pub fn next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1).min(len - 1)
}

/// Index after moving up; stops at the first row
pub fn prev(index: usize) -> usize {
    index.saturating_sub(1)
}

/// Keep `index` inside a list that may have shrunk
pub fn clamp(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}
