//! Card Grid Layout Logic
//!
//! Cursor movement within a page of cards laid out row-major in `columns`
//! columns. The last row may be partial.

/// Direction of a cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Number of rows needed for `len` cards
pub fn row_count(len: usize, columns: usize) -> usize {
    len.div_ceil(columns.max(1))
}

/// Move `cursor` one step in `direction`; stays put at the grid edges
///
/// Moving down into a short last row lands on its last card.
pub fn move_cursor(cursor: usize, direction: Direction, len: usize, columns: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let cursor = cursor.min(len - 1);
    let row = cursor / columns;
    let col = cursor % columns;

    match direction {
        Direction::Left => {
            if col > 0 {
                cursor - 1
            } else {
                cursor
            }
        }
        Direction::Right => {
            if col + 1 < columns && cursor + 1 < len {
                cursor + 1
            } else {
                cursor
            }
        }
        Direction::Up => {
            if row > 0 {
                cursor - columns
            } else {
                cursor
            }
        }
        Direction::Down => {
            if row + 1 < row_count(len, columns) {
                (cursor + columns).min(len - 1)
            } else {
                cursor
            }
        }
    }
}

/// Keep the cursor inside a page that may have shrunk
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}

/// First grid row to draw so the cursor row stays on screen
pub fn first_visible_row(cursor: usize, columns: usize, visible_rows: usize) -> usize {
    let cursor_row = cursor / columns.max(1);
    let visible_rows = visible_rows.max(1);
    (cursor_row + 1).saturating_sub(visible_rows)
}
