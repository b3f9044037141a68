//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement (soft-max column, viewport scrolling)
//! * `mode`    - Normal <-> Insert transitions
//! * `edit`    - Insert-mode text mutation plus `o` / `O`
//! * `command` - command line editing and execution (`:w`, `:q`)
//!
//! Every handler returns a definite `DispatchResult`; nothing fails across
//! this boundary. Persistence errors become status text.

use crate::io_ops::PersistenceGateway;
use crate::{Action, ModeChange};
use core_model::EditorModel;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action. `dirty` means the view changed; `quit` ends the session.
pub fn dispatch<G: PersistenceGateway + ?Sized>(
    action: Action,
    model: &mut EditorModel,
    gateway: &mut G,
) -> DispatchResult {
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, model),
        Action::ModeChange(ModeChange::EnterInsert) => mode::enter_insert(model),
        Action::ModeChange(ModeChange::LeaveInsert) => mode::leave_insert(model),
        Action::Edit(kind) => edit::handle_edit(kind, model),
        Action::CommandStart
        | Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandCancel
        | Action::CommandExecute => command::handle_command_action(action, model, gateway),
        Action::ToggleVerbose => {
            let on = model.state_mut().toggle_verbose();
            tracing::trace!(target: "actions.dispatch", verbose = on, "toggle_verbose");
            DispatchResult::dirty()
        }
    }
}
