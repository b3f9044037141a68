//! Frame composition: a pure snapshot of what the screen should show.
//!
//! `compose` reads an `EditorModel` and produces a `RenderView` without
//! touching the terminal. The writer turns that snapshot into commands; tests
//! inspect it directly.

use crate::status::{DebugContext, build_debug, status_text};
use core_model::EditorModel;
use core_state::Mode;

/// One text row of the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRow {
    Text(String),
    /// Row below the last document line (drawn as `~`).
    PastEnd,
}

/// Where the terminal cursor lands after painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorTarget {
    /// Inside the text area at (screen row, displayed column).
    Text { row: usize, column: usize },
    /// On the status row, after the command line text.
    CommandLine { column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub rows: Vec<RenderRow>,
    pub cursor: CursorTarget,
    pub status: String,
    /// Present only when verbose mode is on.
    pub debug: Option<String>,
    pub mode: Mode,
}

impl RenderView {
    /// Text rows as plain strings, `~` for rows past the document end.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| match r {
                RenderRow::Text(s) => s.clone(),
                RenderRow::PastEnd => "~".to_string(),
            })
            .collect()
    }
}

pub fn compose(model: &EditorModel) -> RenderView {
    let state = model.state();
    let view = model.view();
    let buffer = model.buffer();
    let offset = view.viewport.line_offset;

    let rows = (offset..offset + view.viewport.height)
        .map(|row| {
            if row < buffer.line_count() {
                RenderRow::Text(buffer.line_at(row).to_string())
            } else {
                RenderRow::PastEnd
            }
        })
        .collect();

    let status = status_text(state);
    let cursor = match state.mode {
        Mode::Command => CursorTarget::CommandLine {
            column: status.chars().count(),
        },
        Mode::Normal | Mode::Insert => CursorTarget::Text {
            row: view.cursor.screen_row,
            column: model.display_column(),
        },
    };

    let debug = state.verbose.then(|| {
        build_debug(&DebugContext {
            line_count: buffer.line_count(),
            line_length: model.current_line_length(),
            line_offset: offset,
            column: view.cursor.column,
            screen_row: view.cursor.screen_row,
            mode: state.mode,
        })
    });

    RenderView {
        rows,
        cursor,
        status,
        debug,
        mode: state.mode,
    }
}
