//! Mode transitions (Normal <-> Insert).
//!
//! Command mode is entered and left through the command line actions in
//! `command`; Insert and Command never transition into each other.

use super::DispatchResult;
use core_model::EditorModel;
use core_state::Mode;

pub(crate) const INSERT_INDICATOR: &str = "-- INSERT --";

/// Switch to Insert, collapsing the soft-max column onto the line
/// (one past the last character at most).
pub(crate) fn enter_insert(model: &mut EditorModel) -> DispatchResult {
    let state = model.state_mut();
    state.mode = Mode::Insert;
    state.set_status(INSERT_INDICATOR);
    model.normalize_column();
    tracing::trace!(target: "actions.dispatch", column = model.view().cursor.column, "enter_insert");
    DispatchResult::dirty()
}

/// Escape: step left with the Insert allowance, drop the status, back to Normal.
pub(crate) fn leave_insert(model: &mut EditorModel) -> DispatchResult {
    model.move_horizontal_with(-1, true);
    let state = model.state_mut();
    state.clear_status();
    state.mode = Mode::Normal;
    tracing::trace!(target: "actions.dispatch", column = model.view().cursor.column, "leave_insert");
    DispatchResult::dirty()
}
