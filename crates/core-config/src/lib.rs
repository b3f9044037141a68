//! Configuration loading and parsing.
//!
//! Parses `ledit.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! tab_width = 4
//! verbose = false
//!
//! [view]
//! reserved_rows = 2
//! ```
//!
//! Every field is optional. Unknown fields are ignored so older binaries
//! tolerate newer files. A file that fails to parse falls back to defaults
//! with a warning on the `config` target.
//!
//! The text height is not a file setting: `Config::apply_context` derives it
//! from the terminal rows minus the reserved rows (debug line + status line)
//! and keeps at least one text row.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "ledit.toml";
/// Debug row + status row.
pub const MIN_RESERVED_ROWS: u16 = 2;
pub const MAX_TAB_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigContext {
    pub viewport_columns: u16,
    pub viewport_rows: u16,
}

impl ConfigContext {
    pub fn new(viewport_columns: u16, viewport_rows: u16) -> Self {
        Self {
            viewport_columns,
            viewport_rows,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            verbose: false,
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        4
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    #[serde(default = "ViewConfig::default_reserved_rows")]
    pub reserved_rows: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            reserved_rows: Self::default_reserved_rows(),
        }
    }
}

impl ViewConfig {
    const fn default_reserved_rows() -> u16 {
        MIN_RESERVED_ROWS
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>, // file the settings came from, if any
    pub file: ConfigFile,        // parsed (or default) data
    pub text_height: u16,        // derived from the terminal size
}

/// Config path following platform conventions: working directory first,
/// then the platform config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("ledit").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(target: "config", path = %path.display(), "config_absent_using_defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("reading config {}", path.display()));
        }
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            source: Some(path),
            file,
            text_height: 0, // computed later
        }),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Tab expansion width clamped to `1..=MAX_TAB_WIDTH`.
    pub fn tab_width(&self) -> usize {
        self.file.editor.tab_width.clamp(1, MAX_TAB_WIDTH)
    }

    pub fn reserved_rows(&self) -> u16 {
        self.file.view.reserved_rows.max(MIN_RESERVED_ROWS)
    }

    /// Derive the text height for a terminal of `ctx` size. Returns the value.
    pub fn apply_context(&mut self, ctx: ConfigContext) -> u16 {
        let reserved = self.reserved_rows();
        let available = ctx.viewport_rows.saturating_sub(reserved);
        let height = available.max(1);
        if height != available || reserved != self.file.view.reserved_rows {
            info!(
                target: "config",
                viewport_rows = ctx.viewport_rows,
                viewport_columns = ctx.viewport_columns,
                reserved,
                configured_reserved = self.file.view.reserved_rows,
                height,
                "text_height_clamped"
            );
        }
        self.text_height = height;
        height
    }

    /// Recompute on a terminal resize. Returns `Some(height)` when it changed.
    pub fn recompute_with_context(&mut self, ctx: ConfigContext) -> Option<u16> {
        let prev = self.text_height;
        let current = self.apply_context(ctx);
        if current != prev { Some(current) } else { None }
    }
}
