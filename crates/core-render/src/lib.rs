//! Rendering: frame composition + terminal emission.
//!
//! Screen layout, top to bottom:
//! * `text_rows` rows of document text (`~` past the end of the document),
//! * the debug row (populated only in verbose mode),
//! * the status row (transient message, or the command line in Command mode).
//!
//! Every frame is a full repaint. `frame::compose` is pure and is what the
//! session returns to callers; `writer::Writer` owns crossterm emission.

pub mod frame;
pub mod status;
pub mod writer;

pub use frame::{CursorTarget, RenderRow, RenderView, compose};
pub use writer::{ScreenLayout, Writer};
