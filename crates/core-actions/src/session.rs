//! Editing session: the per-key entry point.
//!
//! `Editor` owns the model and the persistence gateway for the lifetime of a
//! session. Each call to `handle` processes one key completely and returns
//! either the next frame or the end-of-session signal; the caller's loop
//! stops on the latter and releases the file and terminal.
//!
//! The last composed frame is kept and reused when an action reports itself
//! clean. Anything that mutates the model outside `dispatch` drops it.

use crate::dispatcher::dispatch;
use crate::io_ops::PersistenceGateway;
use crate::key_translator::translate_key;
use core_events::KeyEvent;
use core_model::EditorModel;
use core_render::{RenderView, compose};
use core_state::EditorState;
use core_text::LineBuffer;
use std::path::Path;

/// Outcome of one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(RenderView),
    EndOfSession,
}

/// Session options resolved from config and command line.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub height: usize,
    pub tab_width: usize,
    pub verbose: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            height: 20,
            tab_width: core_state::DEFAULT_TAB_WIDTH,
            verbose: false,
        }
    }
}

pub struct Editor<G: PersistenceGateway> {
    model: EditorModel,
    gateway: G,
    frame: Option<RenderView>,
}

impl<G: PersistenceGateway> Editor<G> {
    pub fn new(buffer: LineBuffer, gateway: G, opts: SessionOptions) -> Self {
        let mut state = EditorState::new(buffer);
        state.tab_width = opts.tab_width;
        state.verbose = opts.verbose;
        Self {
            model: EditorModel::new(state, opts.height),
            gateway,
            frame: None,
        }
    }

    /// Show the `file "<path>" <N>L <B>B` open message.
    pub fn announce_file(&mut self, path: &Path, bytes: usize) {
        let state = self.model.state_mut();
        let msg = format!(
            "file \"{}\" {}L {}B",
            path.display(),
            state.buffer.line_count(),
            bytes
        );
        state.set_status(msg);
        self.frame = None;
    }

    pub fn handle(&mut self, key: KeyEvent) -> Step {
        let mode = self.model.state().mode;
        let Some(action) = translate_key(mode, &key) else {
            return Step::Continue(self.current_frame());
        };
        tracing::trace!(target: "actions.dispatch", ?mode, ?action, "dispatch");
        let result = dispatch(action, &mut self.model, &mut self.gateway);
        if result.quit {
            tracing::info!(target: "runtime", "end_of_session");
            return Step::EndOfSession;
        }
        if result.dirty {
            self.frame = None;
        }
        Step::Continue(self.current_frame())
    }

    /// Apply a new text height (terminal resize).
    pub fn resize(&mut self, height: usize) -> RenderView {
        self.model.view_mut().set_height(height);
        tracing::debug!(target: "runtime", height, "viewport_resized");
        self.frame = None;
        self.current_frame()
    }

    /// Compose a fresh frame from the model.
    pub fn render(&self) -> RenderView {
        compose(&self.model)
    }

    fn current_frame(&mut self) -> RenderView {
        match &self.frame {
            Some(frame) => frame.clone(),
            None => {
                let frame = self.render();
                self.frame = Some(frame.clone());
                frame
            }
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut EditorModel {
        self.frame = None;
        &mut self.model
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }
}
