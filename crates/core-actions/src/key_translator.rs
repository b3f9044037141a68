//! Key -> Action translation.
//!
//! Stateless: the mode fully determines the mapping, so this is a plain
//! function rather than a translator object. Keys carrying CTRL or ALT are
//! never translated (Ctrl-C is handled upstream as a shutdown event).

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

pub fn translate_key(mode: Mode, key: &KeyEvent) -> Option<Action> {
    tracing::trace!(target: "actions.translate", ?mode, key = %key, "translate_key_attempt");
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    match mode {
        Mode::Normal => normal(key.code),
        Mode::Insert => insert(key.code),
        Mode::Command => command(key.code),
    }
}

fn normal(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('h') | KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Char('l') | KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Char('j') | KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Char('k') | KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Char('0') => Action::Motion(MotionKind::LineStart),
        KeyCode::Char('H') => Action::Motion(MotionKind::ScreenTop),
        KeyCode::Char('L') => Action::Motion(MotionKind::ScreenBottom),
        KeyCode::Char('o') => Action::Edit(EditKind::OpenBelow),
        KeyCode::Char('O') => Action::Edit(EditKind::OpenAbove),
        KeyCode::Char('i') => Action::ModeChange(ModeChange::EnterInsert),
        KeyCode::Char(':') => Action::CommandStart,
        KeyCode::Char('v') => Action::ToggleVerbose,
        _ => return None,
    };
    Some(action)
}

fn insert(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Esc => Action::ModeChange(ModeChange::LeaveInsert),
        KeyCode::Backspace => Action::Edit(EditKind::Backspace),
        KeyCode::Enter => Action::Edit(EditKind::Newline),
        KeyCode::Tab => Action::Edit(EditKind::InsertTab),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Char(c) if !c.is_control() => Action::Edit(EditKind::InsertChar(c)),
        KeyCode::Char(_) => return None,
    };
    Some(action)
}

fn command(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(c) if !c.is_control() => Some(Action::CommandChar(c)),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        KeyCode::Esc => Some(Action::CommandCancel),
        KeyCode::Enter => Some(Action::CommandExecute),
        _ => None,
    }
}
