//! Cursor movement.
//!
//! Horizontal steps honor the overshoot allowance of the current mode;
//! vertical steps leave the soft-max column alone.

use super::DispatchResult;
use crate::MotionKind;
use core_model::{EditorModel, VerticalMove};

pub(crate) fn handle_motion(kind: MotionKind, model: &mut EditorModel) -> DispatchResult {
    let before = model.view().clone();
    let line_count = model.buffer().line_count();
    match kind {
        MotionKind::Left => {
            model.move_horizontal(-1);
        }
        MotionKind::Right => {
            model.move_horizontal(1);
        }
        MotionKind::Up => {
            if model.move_vertical(-1) == VerticalMove::Blocked {
                return DispatchResult::clean();
            }
        }
        MotionKind::Down => {
            if model.move_vertical(1) == VerticalMove::Blocked {
                return DispatchResult::clean();
            }
        }
        MotionKind::LineStart => {
            model.view_mut().cursor.column = 0;
        }
        MotionKind::ScreenTop => model.view_mut().jump_screen_top(),
        MotionKind::ScreenBottom => model.view_mut().jump_screen_bottom(line_count),
    }
    let after = model.view();
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        from_row = before.absolute_row(),
        from_col = before.cursor.column,
        to_row = after.absolute_row(),
        to_col = after.cursor.column,
        "motion"
    );
    if *after == before {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
