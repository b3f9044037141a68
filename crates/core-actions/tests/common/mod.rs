#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Editor, GatewayError, PersistenceGateway, SessionOptions, Step};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_text::LineBuffer;
use std::io;

#[derive(Clone, Copy, Debug)]
pub enum Stroke {
    Char(char),
    Esc,
    Enter,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Ctrl(char),
}

impl Stroke {
    pub fn to_event(self) -> KeyEvent {
        match self {
            Stroke::Char(c) => KeyEvent::char(c),
            Stroke::Esc => KeyEvent::new(KeyCode::Esc),
            Stroke::Enter => KeyEvent::new(KeyCode::Enter),
            Stroke::Backspace => KeyEvent::new(KeyCode::Backspace),
            Stroke::Tab => KeyEvent::new(KeyCode::Tab),
            Stroke::Up => KeyEvent::new(KeyCode::Up),
            Stroke::Down => KeyEvent::new(KeyCode::Down),
            Stroke::Left => KeyEvent::new(KeyCode::Left),
            Stroke::Right => KeyEvent::new(KeyCode::Right),
            Stroke::Ctrl(c) => KeyEvent::with_mods(KeyCode::Char(c), KeyModifiers::CTRL),
        }
    }
}

/// Strokes for literal text, one `Char` per character.
pub fn typed(text: &str) -> Vec<Stroke> {
    text.chars().map(Stroke::Char).collect()
}

/// Gateway that keeps every write in memory and can be told to fail.
#[derive(Default)]
pub struct MemoryGateway {
    pub writes: Vec<Vec<u8>>,
    pub fail_with: Option<io::ErrorKind>,
}

impl PersistenceGateway for MemoryGateway {
    fn write(&mut self, document: &LineBuffer) -> Result<usize, GatewayError> {
        if let Some(kind) = self.fail_with {
            return Err(GatewayError::Write(io::Error::new(kind, "simulated failure")));
        }
        let bytes = document.to_bytes();
        let n = bytes.len();
        self.writes.push(bytes);
        Ok(n)
    }
}

pub fn editor_with_height(lines: &[&str], height: usize) -> Editor<MemoryGateway> {
    Editor::new(
        LineBuffer::from_lines(lines.iter().copied()),
        MemoryGateway::default(),
        SessionOptions {
            height,
            ..Default::default()
        },
    )
}

pub fn editor(lines: &[&str]) -> Editor<MemoryGateway> {
    editor_with_height(lines, 10)
}

/// Feed strokes until the session ends. Returns true if it ended.
pub fn replay<G: PersistenceGateway>(ed: &mut Editor<G>, keys: &[Stroke]) -> bool {
    for stroke in keys {
        if ed.handle(stroke.to_event()) == Step::EndOfSession {
            return true;
        }
    }
    false
}

pub fn document<G: PersistenceGateway>(ed: &Editor<G>) -> Vec<String> {
    ed.model().buffer().lines().to_vec()
}

/// (absolute row, displayed column)
pub fn cursor<G: PersistenceGateway>(ed: &Editor<G>) -> (usize, usize) {
    (ed.model().absolute_row(), ed.model().display_column())
}
