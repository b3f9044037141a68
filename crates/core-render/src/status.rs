//! Status row and debug line composition.
//!
//! Two-stage pipeline, as for the status line:
//! 1. `compose_debug` produces an ordered vector of `DebugSegment` items.
//! 2. `format_debug` renders those segments into the final string:
//!
//! `DEBUG: build=<v>; file len=<n> lines; curr line len=<n> chars; curr line offset=<n> lines; cursor=(x=<c>,y=<r>); mode=<MODE>`
//!
//! The status row text itself is chosen by `status_text`: the command line
//! while in Command mode, otherwise the transient status message.

use core_state::{EditorState, Mode};

/// Crate version baked in at build time; reported on the debug line.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Values shown on the debug line.
pub struct DebugContext {
    pub line_count: usize,
    pub line_length: usize,
    pub line_offset: usize,
    /// Stored (soft-max) column, not the displayed one.
    pub column: usize,
    pub screen_row: usize,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugSegment {
    Build(&'static str),
    FileLen(usize),
    LineLen(usize),
    Offset(usize),
    Cursor { x: usize, y: usize },
    Mode(&'static str),
}

pub fn compose_debug(ctx: &DebugContext) -> Vec<DebugSegment> {
    vec![
        DebugSegment::Build(BUILD_VERSION),
        DebugSegment::FileLen(ctx.line_count),
        DebugSegment::LineLen(ctx.line_length),
        DebugSegment::Offset(ctx.line_offset),
        DebugSegment::Cursor {
            x: ctx.column,
            y: ctx.screen_row,
        },
        DebugSegment::Mode(ctx.mode.label()),
    ]
}

pub fn format_debug(segments: &[DebugSegment]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .map(|seg| match seg {
            DebugSegment::Build(v) => format!("build={v}"),
            DebugSegment::FileLen(n) => format!("file len={n} lines"),
            DebugSegment::LineLen(n) => format!("curr line len={n} chars"),
            DebugSegment::Offset(n) => format!("curr line offset={n} lines"),
            DebugSegment::Cursor { x, y } => format!("cursor=(x={x},y={y})"),
            DebugSegment::Mode(m) => format!("mode={m}"),
        })
        .collect();
    format!("DEBUG: {}", parts.join("; "))
}

pub fn build_debug(ctx: &DebugContext) -> String {
    format_debug(&compose_debug(ctx))
}

/// Text for the status row.
pub fn status_text(state: &EditorState) -> String {
    if matches!(state.mode, Mode::Command) {
        state.command_line.buffer().to_string()
    } else {
        state.status().unwrap_or_default().to_string()
    }
}
