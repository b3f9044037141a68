//! Terminal writer.
//!
//! Translates a `RenderView` into an ordered list of primitive commands and
//! flushes them once per frame. Commands preserve ordering; positions are
//! absolute with a (0,0) origin and the caller supplies the screen layout.

use crate::frame::{CursorTarget, RenderRow, RenderView};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    /// Clear the row the cursor is on; always preceded by `MoveTo(0, y)`.
    ClearLine(u16),
    Print(String),
    /// Dimmed text, used for past-end markers.
    PrintDim(String),
}

/// Terminal geometry for one paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub columns: u16,
    pub rows: u16,
    /// Rows given to document text; the debug row sits right after them.
    pub text_rows: u16,
}

impl ScreenLayout {
    fn status_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }
}

#[derive(Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self, y: u16) {
        self.cmds.push(Command::MoveTo(0, y));
        self.cmds.push(Command::ClearLine(y));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn print_dim<S: Into<String>>(&mut self, s: S) {
        self.cmds.push(Command::PrintDim(s.into()));
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Queue a full repaint of `view` for `layout`.
    pub fn paint(&mut self, view: &RenderView, layout: ScreenLayout) {
        let width = layout.columns as usize;
        for (y, row) in view.rows.iter().take(layout.text_rows as usize).enumerate() {
            self.clear_line(y as u16);
            match row {
                RenderRow::Text(s) => self.print(truncate(s, width)),
                RenderRow::PastEnd => self.print_dim("~"),
            }
        }
        let debug_row = layout.text_rows;
        if debug_row < layout.status_row() {
            self.clear_line(debug_row);
            if let Some(debug) = &view.debug {
                self.print(truncate(debug, width));
            }
        }
        let status_row = layout.status_row();
        self.clear_line(status_row);
        self.print(truncate(&view.status, width));

        let (x, y) = match view.cursor {
            CursorTarget::Text { row, column } => (column, row),
            CursorTarget::CommandLine { column } => (column, status_row as usize),
        };
        let x = x.min(width.saturating_sub(1));
        self.move_to(clamp_u16(x), clamp_u16(y));
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.flush_to(&mut out)
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        tracing::trace!(target: "render", commands = self.cmds.len(), "flush");
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::ClearLine(_) => {
                    queue!(out, Clear(ClearType::CurrentLine))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::PrintDim(s) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Dim),
                        Print(s),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
