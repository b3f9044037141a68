//! Editor state: document, mode, command line, status message and display flags.
//!
//! Cursor and viewport live in `core-model::View`; this crate stays
//! document-centric so the mode logic and the cursor logic can be borrowed
//! independently by the dispatcher.
//!
//! Mode transitions:
//! * `Normal -> Insert` (`i`, `o`, `O`), `Normal -> Command` (`:`).
//! * `Insert -> Normal` (Esc), `Command -> Normal` (Esc, empty backspace, or after
//!   executing a command).
//! * Insert and Command never transition directly into each other.

use core_text::LineBuffer;

/// Spaces inserted for a Tab key when no configuration overrides it.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation; the cursor always rests on a real character.
    #[default]
    Normal,
    /// Text entry; the cursor may sit one past the last character.
    Insert,
    /// `:` command line entry.
    Command,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }
}

/// Command line accumulator. Stores the raw buffer including the leading ':'
/// while active; empty means inactive.
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    /// Returns true if a command is being entered (buffer starts with ':').
    pub fn is_active(&self) -> bool {
        self.buf.starts_with(':')
    }
    /// Raw buffer including the ':' prefix.
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    pub fn clear(&mut self) {
        self.buf.clear();
    }
    /// Begin a new command, resetting content to ":".
    pub fn begin(&mut self) {
        self.buf.clear();
        self.buf.push(':');
    }
    pub fn push_char(&mut self, ch: char) {
        if self.buf.is_empty() && ch != ':' {
            self.buf.push(':');
        }
        self.buf.push(ch);
    }
    /// Remove the last character. Returns true when the buffer became empty
    /// (the ':' itself was removed).
    pub fn backspace(&mut self) -> bool {
        self.buf.pop();
        self.buf.is_empty()
    }
    /// Command text with the ':' prefix stripped and surrounding whitespace trimmed.
    pub fn command(&self) -> &str {
        self.buf.strip_prefix(':').unwrap_or(&self.buf).trim()
    }
}

/// Top-level editor state container.
#[derive(Debug)]
pub struct EditorState {
    pub buffer: LineBuffer,
    pub mode: Mode,
    pub command_line: CommandLineState,
    /// Show the debug line under the text area.
    pub verbose: bool,
    pub tab_width: usize,
    status: Option<String>,
}

impl EditorState {
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            mode: Mode::Normal,
            command_line: CommandLineState::default(),
            verbose: false,
            tab_width: DEFAULT_TAB_WIDTH,
            status: None,
        }
    }

    /// Transient message shown on the status row, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        tracing::trace!(target: "state", status = %msg, "status_set");
        self.status = Some(msg);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn toggle_verbose(&mut self) -> bool {
        self.verbose = !self.verbose;
        self.verbose
    }

    /// Spaces that replace a Tab key.
    pub fn tab_expansion(&self) -> String {
        " ".repeat(self.tab_width)
    }
}
