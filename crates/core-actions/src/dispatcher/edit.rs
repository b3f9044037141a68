//! Text edits: Insert-mode typing plus the Normal-mode line openers.
//!
//! Insert-mode edits first clamp the stored column to `[0, line_length]` so
//! a sticky column carried in by a vertical move never indexes past the line.

use super::DispatchResult;
use super::mode::enter_insert;
use crate::EditKind;
use core_model::EditorModel;
use core_state::Mode;

pub(crate) fn handle_edit(kind: EditKind, model: &mut EditorModel) -> DispatchResult {
    match kind {
        EditKind::OpenBelow => open_below(model),
        EditKind::OpenAbove => open_above(model),
        _ if !matches!(model.state().mode, Mode::Insert) => DispatchResult::clean(),
        EditKind::InsertChar(c) => {
            let mut buf = [0u8; 4];
            insert_text(model, c.encode_utf8(&mut buf), "insert_char")
        }
        EditKind::InsertTab => {
            let spaces = model.state().tab_expansion();
            insert_text(model, &spaces, "insert_tab")
        }
        EditKind::Newline => newline(model),
        EditKind::Backspace => backspace(model),
    }
}

fn clamp_column(model: &mut EditorModel) -> (usize, usize) {
    let len = model.current_line_length();
    let view = model.view_mut();
    view.cursor.column = view.cursor.column.min(len);
    (view.absolute_row(), view.cursor.column)
}

fn insert_text(model: &mut EditorModel, text: &str, op: &'static str) -> DispatchResult {
    let (row, col) = clamp_column(model);
    model.state_mut().buffer.insert_char(row, col, text);
    model.move_horizontal_with(text.chars().count() as isize, true);
    tracing::trace!(target: "actions.dispatch", op, row, col, to_col = model.view().cursor.column, "edit");
    DispatchResult::dirty()
}

fn newline(model: &mut EditorModel) -> DispatchResult {
    let (row, col) = clamp_column(model);
    model.state_mut().buffer.split_at(row, col);
    model.view_mut().cursor.column = 0;
    model.move_vertical(1);
    tracing::trace!(target: "actions.dispatch", op = "newline", row, col, "edit");
    DispatchResult::dirty()
}

fn backspace(model: &mut EditorModel) -> DispatchResult {
    let stored = model.view().cursor.column;
    let (row, col) = clamp_column(model);
    if col == 0 {
        if row == 0 {
            // Nothing to delete; only the clamp may have moved the stored column.
            return if stored == col {
                DispatchResult::clean()
            } else {
                DispatchResult::dirty()
            };
        }
        let prev_len = model.buffer().line_length(row - 1);
        model.state_mut().buffer.merge_with_previous(row);
        model.move_vertical(-1);
        model.view_mut().cursor.column = prev_len;
        tracing::trace!(target: "actions.dispatch", op = "merge_with_previous", row, "edit");
    } else {
        model.state_mut().buffer.delete_char_before(row, col);
        model.move_horizontal_with(-1, true);
        tracing::trace!(target: "actions.dispatch", op = "backspace", row, col, "edit");
    }
    DispatchResult::dirty()
}

/// `o`: blank line below, cursor onto it, Insert.
fn open_below(model: &mut EditorModel) -> DispatchResult {
    let row = model.absolute_row();
    model.state_mut().buffer.insert_blank_line_after(row);
    model.move_vertical(1);
    tracing::trace!(target: "actions.dispatch", op = "open_below", row, "edit");
    enter_insert(model)
}

/// `O`: blank line above; the cursor row now addresses it.
fn open_above(model: &mut EditorModel) -> DispatchResult {
    let row = model.absolute_row();
    model.state_mut().buffer.insert_blank_line_before(row);
    tracing::trace!(target: "actions.dispatch", op = "open_above", row, "edit");
    enter_insert(model)
}
