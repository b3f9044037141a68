//! Cursor and viewport model.
//!
//! A `View` owns presentation state: the cursor (stored as a soft-max column
//! plus a screen-relative row) and the viewport (`line_offset`, `height`).
//! The absolute document row is always `line_offset + screen_row`.
//!
//! Soft-max column
//! ---------------
//! `Cursor::column` is the last column the user asked for, not necessarily a
//! column that exists on the current line. Say the cursor sits at column 30
//! and moves onto a 10 character line: the stored column stays 30 while the
//! displayed column is 9. Moving back onto a long line restores column 30.
//! The stored value is clamped only when it is used (display, insertion,
//! deletion), never on vertical moves.
//!
//! Invariants (must hold after every public call):
//! * `absolute_row() < line_count` of the document.
//! * `screen_row < viewport.height` and `viewport.height >= 1`.
//! * A vertical step changes `line_offset` by at most the overshoot of that
//!   step (one row for `j`/`k`); the viewport never jumps.

use core_state::{EditorState, Mode};
use core_text::LineBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Soft-max column (see module docs).
    pub column: usize,
    /// Row relative to the top of the viewport.
    pub screen_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Document index of the first displayed row.
    pub line_offset: usize,
    /// Rows available for document text.
    pub height: usize,
}

impl Viewport {
    pub fn new(line_offset: usize, height: usize) -> Self {
        Self {
            line_offset,
            height: height.max(1),
        }
    }

    fn last_row(&self) -> usize {
        self.height.saturating_sub(1)
    }
}

/// Outcome of a vertical cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMove {
    /// Target row outside the document; nothing changed.
    Blocked,
    /// Cursor moved within the visible rows.
    Moved,
    /// Viewport scrolled to keep the cursor visible.
    Scrolled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub cursor: Cursor,
    pub viewport: Viewport,
}

impl View {
    pub fn new(height: usize) -> Self {
        Self {
            cursor: Cursor::default(),
            viewport: Viewport::new(0, height),
        }
    }

    pub fn absolute_row(&self) -> usize {
        self.viewport.line_offset + self.cursor.screen_row
    }

    /// Step the cursor `dy` rows. Out-of-document targets are a no-op; targets
    /// above/below the visible rows scroll the viewport and pin the cursor to
    /// the edge row.
    pub fn move_vertical(&mut self, dy: isize, line_count: usize) -> VerticalMove {
        let target = self.cursor.screen_row as isize + dy;
        let absolute = self.viewport.line_offset as isize + target;
        if absolute < 0 || absolute >= line_count as isize {
            return VerticalMove::Blocked;
        }
        let last = self.viewport.last_row() as isize;
        if target < 0 {
            self.viewport.line_offset -= target.unsigned_abs();
            self.cursor.screen_row = 0;
            VerticalMove::Scrolled
        } else if target > last {
            self.viewport.line_offset += (target - last) as usize;
            self.cursor.screen_row = last as usize;
            VerticalMove::Scrolled
        } else {
            self.cursor.screen_row = target as usize;
            VerticalMove::Moved
        }
    }

    /// Step the soft-max column `dx` columns on a line of `line_len` columns.
    ///
    /// The limit is `line_len` (Normal) or `line_len + 1` when `allow_past_end`
    /// lets the cursor sit after the last character (Insert). Reaching the
    /// limit keeps the column when moving right; moving left clamps to
    /// `limit - 2`, the character before the one displayed under the cursor.
    /// Empty lines keep the column. Returns true if the column changed.
    pub fn move_horizontal(&mut self, dx: isize, line_len: usize, allow_past_end: bool) -> bool {
        let target = self.cursor.column as isize + dx;
        if target < 0 {
            return false;
        }
        let limit = if allow_past_end { line_len + 1 } else { line_len };
        let mut column = target as usize;
        if column >= limit {
            column = if column >= self.cursor.column || line_len == 0 {
                self.cursor.column
            } else {
                limit.saturating_sub(2)
            };
        }
        let changed = column != self.cursor.column;
        self.cursor.column = column;
        changed
    }

    /// Column at which the cursor is drawn / used in `mode`.
    ///
    /// Normal mode keeps the cursor on a real character (`line_len - 1`);
    /// Insert and Command allow one past the end.
    pub fn display_column(&self, mode: Mode, line_len: usize) -> usize {
        match mode {
            Mode::Normal if self.cursor.column >= line_len => line_len.saturating_sub(1),
            Mode::Normal => self.cursor.column,
            Mode::Insert | Mode::Command => self.cursor.column.min(line_len),
        }
    }

    /// `H`: topmost displayed row.
    pub fn jump_screen_top(&mut self) {
        self.cursor.screen_row = 0;
    }

    /// `L`: bottommost displayed row, or the last document row when the
    /// viewport extends past the end of the document.
    pub fn jump_screen_bottom(&mut self, line_count: usize) {
        let mut row = self.viewport.last_row();
        if self.viewport.line_offset + row >= line_count {
            row = line_count - self.viewport.line_offset - 1;
        }
        self.cursor.screen_row = row;
    }

    /// Apply a new text height, advancing `line_offset` when the cursor row
    /// would fall below the new bottom so the absolute row is preserved.
    pub fn set_height(&mut self, height: usize) {
        self.viewport.height = height.max(1);
        let last = self.viewport.last_row();
        if self.cursor.screen_row > last {
            self.viewport.line_offset += self.cursor.screen_row - last;
            self.cursor.screen_row = last;
        }
    }
}

/// Editor state plus its view: the unit the dispatcher mutates.
#[derive(Debug)]
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, height: usize) -> Self {
        Self {
            state,
            view: View::new(height),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
    pub fn buffer(&self) -> &LineBuffer {
        &self.state.buffer
    }

    pub fn absolute_row(&self) -> usize {
        self.view.absolute_row()
    }

    pub fn current_line_length(&self) -> usize {
        self.state.buffer.line_length(self.view.absolute_row())
    }

    /// Vertical step; any scroll clears the status message.
    pub fn move_vertical(&mut self, dy: isize) -> VerticalMove {
        let outcome = self.view.move_vertical(dy, self.state.buffer.line_count());
        if outcome == VerticalMove::Scrolled {
            self.state.clear_status();
            tracing::trace!(
                target: "model",
                line_offset = self.view.viewport.line_offset,
                "viewport_scrolled"
            );
        }
        outcome
    }

    /// Horizontal step using the overshoot allowance of the current mode.
    pub fn move_horizontal(&mut self, dx: isize) -> bool {
        let allow_past_end = !matches!(self.state.mode, Mode::Normal);
        self.move_horizontal_with(dx, allow_past_end)
    }

    pub fn move_horizontal_with(&mut self, dx: isize, allow_past_end: bool) -> bool {
        let len = self.current_line_length();
        self.view.move_horizontal(dx, len, allow_past_end)
    }

    pub fn display_column(&self) -> usize {
        self.view
            .display_column(self.state.mode, self.current_line_length())
    }

    /// Collapse the soft-max column to the column displayed in the current mode.
    pub fn normalize_column(&mut self) {
        self.view.cursor.column = self.display_column();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::LineBuffer;

    fn model(lines: &[&str], height: usize) -> EditorModel {
        EditorModel::new(
            EditorState::new(LineBuffer::from_lines(lines.iter().copied())),
            height,
        )
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn view_initializes_at_origin() {
        let v = View::new(10);
        assert_eq!(v.cursor, Cursor::default());
        assert_eq!(v.viewport, Viewport::new(0, 10));
        assert_eq!(View::new(0).viewport.height, 1, "height floor");
    }

    #[test]
    fn vertical_moves_stop_at_document_bounds() {
        let mut v = View::new(5);
        assert_eq!(v.move_vertical(-1, 3), VerticalMove::Blocked);
        assert_eq!(v.move_vertical(1, 3), VerticalMove::Moved);
        assert_eq!(v.move_vertical(1, 3), VerticalMove::Moved);
        assert_eq!(v.move_vertical(1, 3), VerticalMove::Blocked);
        assert_eq!(v.absolute_row(), 2);
        assert_eq!(v.viewport.line_offset, 0);
    }

    #[test]
    fn scrolls_one_row_at_a_time() {
        let mut v = View::new(3);
        for _ in 0..2 {
            v.move_vertical(1, 10);
        }
        assert_eq!(v.cursor.screen_row, 2);
        assert_eq!(v.move_vertical(1, 10), VerticalMove::Scrolled);
        assert_eq!(v.viewport.line_offset, 1);
        assert_eq!(v.cursor.screen_row, 2);
        assert_eq!(v.absolute_row(), 3);
        for _ in 0..2 {
            v.move_vertical(-1, 10);
        }
        assert_eq!(v.cursor.screen_row, 0);
        assert_eq!(v.move_vertical(-1, 10), VerticalMove::Scrolled);
        assert_eq!(v.viewport.line_offset, 0);
        assert_eq!(v.absolute_row(), 0);
    }

    #[test]
    fn scroll_clears_status_but_plain_move_does_not() {
        let lines = numbered(5);
        let mut m = EditorModel::new(EditorState::new(LineBuffer::from_lines(lines)), 2);
        m.state_mut().set_status("hello");
        m.move_vertical(1);
        assert_eq!(m.state().status(), Some("hello"));
        assert_eq!(m.move_vertical(1), VerticalMove::Scrolled);
        assert_eq!(m.state().status(), None);
    }

    #[test]
    fn right_move_cannot_overshoot_in_normal() {
        let mut v = View::new(5);
        for _ in 0..10 {
            v.move_horizontal(1, 3, false);
        }
        assert_eq!(v.cursor.column, 2);
    }

    #[test]
    fn right_move_may_reach_line_end_in_insert() {
        let mut v = View::new(5);
        for _ in 0..10 {
            v.move_horizontal(1, 3, true);
        }
        assert_eq!(v.cursor.column, 3);
    }

    #[test]
    fn left_move_from_sticky_column_clamps_to_second_to_last() {
        let mut v = View::new(5);
        v.cursor.column = 10;
        assert!(v.move_horizontal(-1, 4, false));
        assert_eq!(v.cursor.column, 2);
        v.cursor.column = 10;
        assert!(v.move_horizontal(-1, 4, true));
        assert_eq!(v.cursor.column, 3);
    }

    #[test]
    fn left_move_on_single_char_line_saturates_at_zero() {
        let mut v = View::new(5);
        v.cursor.column = 7;
        v.move_horizontal(-1, 1, false);
        assert_eq!(v.cursor.column, 0);
    }

    #[test]
    fn empty_line_keeps_sticky_column() {
        let mut v = View::new(5);
        v.cursor.column = 6;
        assert!(!v.move_horizontal(-1, 0, false));
        assert_eq!(v.cursor.column, 6);
        assert!(!v.move_horizontal(1, 0, true));
        assert_eq!(v.cursor.column, 6);
    }

    #[test]
    fn left_at_column_zero_is_noop() {
        let mut v = View::new(5);
        assert!(!v.move_horizontal(-1, 5, false));
        assert_eq!(v.cursor.column, 0);
    }

    #[test]
    fn display_column_by_mode() {
        let mut v = View::new(5);
        v.cursor.column = 9;
        assert_eq!(v.display_column(Mode::Normal, 4), 3);
        assert_eq!(v.display_column(Mode::Insert, 4), 4);
        assert_eq!(v.display_column(Mode::Normal, 0), 0);
        v.cursor.column = 2;
        assert_eq!(v.display_column(Mode::Normal, 4), 2);
        assert_eq!(v.display_column(Mode::Command, 4), 2);
    }

    #[test]
    fn screen_top_and_bottom_jumps() {
        let mut m = model(&["a", "b", "c"], 10);
        m.view_mut().jump_screen_bottom(3);
        assert_eq!(m.absolute_row(), 2, "clamped to last document row");
        m.view_mut().jump_screen_top();
        assert_eq!(m.absolute_row(), 0);

        let lines = numbered(20);
        let mut v = View::new(5);
        v.viewport.line_offset = 4;
        v.jump_screen_bottom(lines.len());
        assert_eq!(v.absolute_row(), 8);
    }

    #[test]
    fn shrinking_height_keeps_absolute_row() {
        let mut v = View::new(10);
        for _ in 0..8 {
            v.move_vertical(1, 20);
        }
        v.set_height(4);
        assert_eq!(v.absolute_row(), 8);
        assert_eq!(v.cursor.screen_row, 3);
        assert_eq!(v.viewport.line_offset, 5);
    }

    #[test]
    fn normalize_column_uses_mode() {
        let mut m = model(&["abc"], 5);
        m.view_mut().cursor.column = 8;
        m.normalize_column();
        assert_eq!(m.view().cursor.column, 2);
        m.state_mut().mode = Mode::Insert;
        m.view_mut().cursor.column = 8;
        m.normalize_column();
        assert_eq!(m.view().cursor.column, 3);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn viewport_stays_within_document(
                line_count in 1usize..60,
                height in 1usize..15,
                steps in prop::collection::vec(prop_oneof![Just(-1isize), Just(1isize)], 0..200),
            ) {
                let mut v = View::new(height);
                for dy in steps {
                    v.move_vertical(dy, line_count);
                    prop_assert!(v.absolute_row() < line_count);
                    prop_assert!(v.cursor.screen_row < v.viewport.height);
                }
            }

            #[test]
            fn sticky_column_survives_shorter_lines(
                long_len in 1usize..40,
                short_len in 0usize..40,
                column_seed in any::<usize>(),
            ) {
                let column = column_seed % long_len;
                let long = "x".repeat(long_len);
                let short = "y".repeat(short_len.min(column));
                let lines = vec![long.clone(), short, long];
                let mut m = EditorModel::new(EditorState::new(LineBuffer::from_lines(lines)), 10);
                m.view_mut().cursor.column = column;
                m.move_vertical(1);
                prop_assert!(m.display_column() <= column);
                m.move_vertical(1);
                prop_assert_eq!(m.display_column(), column);
                m.move_vertical(-1);
                m.move_vertical(-1);
                prop_assert_eq!(m.display_column(), column);
            }
        }
    }
}
