//! Command line editing and execution (`:w`, `:q`).
//!
//! Executing always returns to Normal, whatever the outcome. Write failures
//! and unknown commands only set the status message.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::PersistenceGateway;
use core_model::EditorModel;
use core_state::Mode;

pub(crate) fn handle_command_action<G: PersistenceGateway + ?Sized>(
    action: Action,
    model: &mut EditorModel,
    gateway: &mut G,
) -> DispatchResult {
    let state = model.state_mut();
    match action {
        Action::CommandStart => {
            state.clear_status();
            state.command_line.begin();
            state.mode = Mode::Command;
            DispatchResult::dirty()
        }
        Action::CommandChar(ch) => {
            state.command_line.push_char(ch);
            DispatchResult::dirty()
        }
        Action::CommandBackspace => {
            if state.command_line.backspace() {
                state.mode = Mode::Normal;
            }
            DispatchResult::dirty()
        }
        Action::CommandCancel => {
            state.command_line.clear();
            state.mode = Mode::Normal;
            DispatchResult::dirty()
        }
        Action::CommandExecute => {
            let text = state.command_line.command().to_string();
            state.command_line.clear();
            state.mode = Mode::Normal;
            execute_command(&text, model, gateway)
        }
        _ => DispatchResult::clean(),
    }
}

fn execute_command<G: PersistenceGateway + ?Sized>(
    text: &str,
    model: &mut EditorModel,
    gateway: &mut G,
) -> DispatchResult {
    let parsed = CommandParser::parse(text);
    tracing::debug!(target: "actions.command", command = text, ?parsed, "execute");
    match parsed {
        ParsedCommand::Quit => DispatchResult::quit(),
        ParsedCommand::Write => {
            let state = model.state_mut();
            match gateway.write(&state.buffer) {
                Ok(bytes) => state.set_status(format!("{bytes} bytes written to disc")),
                Err(e) => {
                    tracing::warn!(target: "actions.command", error = %e, "write_failed");
                    state.set_status(format!("write failed: {e}"));
                }
            }
            DispatchResult::dirty()
        }
        ParsedCommand::Unknown(other) => {
            model
                .state_mut()
                .set_status(format!("unrecognized command: {other}"));
            DispatchResult::dirty()
        }
    }
}
