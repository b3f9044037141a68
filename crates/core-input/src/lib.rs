//! Terminal input decoding.
//!
//! Reads crossterm events (blocking) and decodes them into `core_events::Event`.
//! Ctrl-C becomes `Event::Shutdown`; key releases and keys outside the
//! editor's vocabulary are dropped here so the core only ever sees the named
//! keys it understands plus literal characters.

use anyhow::Result;
use core_events::{Event, InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Block until the next event the editor cares about.
pub fn read_event() -> Result<Event> {
    loop {
        let raw = event::read()?;
        if let Some(ev) = decode_event(raw) {
            return Ok(ev);
        }
    }
}

/// Decode one crossterm event. `None` means ignore it.
pub fn decode_event(raw: CEvent) -> Option<Event> {
    match raw {
        CEvent::Key(key) => decode_key(&key),
        CEvent::Resize(w, h) => {
            tracing::trace!(target: "input", columns = w, rows = h, "resize");
            Some(Event::Resize(w, h))
        }
        _ => None,
    }
}

fn decode_key(key: &CKeyEvent) -> Option<Event> {
    if key.kind == CKind::Release {
        return None;
    }
    if matches!(key.code, CKeyCode::Char('c')) && key.modifiers.contains(CMods::CONTROL) {
        tracing::debug!(target: "input", "ctrl_c_shutdown");
        return Some(Event::Shutdown);
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace | CKeyCode::Delete => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        other => {
            tracing::trace!(target: "input", key = ?other, "unmapped_key");
            return None;
        }
    };
    let mods = map_mods(key.modifiers);
    tracing::trace!(target: "input", %code, ?mods, "keypress");
    Some(Event::Input(InputEvent::Key(KeyEvent::with_mods(code, mods))))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
