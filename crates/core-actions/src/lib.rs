//! Actions: the vocabulary between decoded keys and editor mutation.
//!
//! Pipeline for one key event:
//! 1. `translate_key(mode, &key)` classifies the key into an `Action`
//!    (pure; unknown keys yield `None` and are a no-op in every mode).
//! 2. `dispatch(action, model, gateway)` applies it to the `EditorModel`,
//!    returning a `DispatchResult` (`dirty`, `quit`).
//! 3. `Editor::handle` wraps both and hands back a `Step`: either the next
//!    `RenderView` or the end-of-session signal.
//!
//! Persistence is reached only through the `PersistenceGateway` trait so the
//! dispatcher can be driven against in-memory gateways in tests.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;
pub mod session;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{FileGateway, GatewayError, PersistenceGateway};
pub use key_translator::translate_key;
pub use session::{Editor, SessionOptions, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    /// `H`
    ScreenTop,
    /// `L`
    ScreenBottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    /// Tab expanded to spaces.
    InsertTab,
    Newline,
    Backspace,
    /// `o`
    OpenBelow,
    /// `O`
    OpenAbove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    CommandStart,
    CommandChar(char),
    CommandBackspace,
    CommandCancel,
    CommandExecute,
    ToggleVerbose,
}
