//! Persistence: the backing file behind a session.
//!
//! The file is opened read-write once at session start and held until the
//! gateway is dropped. Every write is a full overwrite (truncate, rewrite,
//! sync); there is no partial or in-place patching. A failed write leaves the
//! in-memory document untouched and the session running.

use core_text::LineBuffer;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode { path: PathBuf, source: Utf8Error },
    #[error("{0}")]
    Write(#[from] io::Error),
}

/// Destination for `:w`.
pub trait PersistenceGateway {
    /// Replace the backing contents with `document`. Returns bytes written.
    fn write(&mut self, document: &LineBuffer) -> Result<usize, GatewayError>;
}

#[derive(Debug)]
pub struct FileGateway {
    path: PathBuf,
    file: File,
}

impl FileGateway {
    /// Open an existing file for reading and writing.
    pub fn open(path: &Path) -> Result<Self, GatewayError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| GatewayError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(target: "io", path = %path.display(), "file_opened");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Read the whole file into a document. Returns the document and the raw
    /// byte count. A file that is not valid UTF-8 is refused so that `:w`
    /// can never rewrite bytes the user did not touch.
    pub fn read_document(&mut self) -> Result<(LineBuffer, usize), GatewayError> {
        let mut bytes = Vec::new();
        self.file
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.file.read_to_end(&mut bytes))
            .map_err(|source| GatewayError::Read {
                path: self.path.clone(),
                source,
            })?;
        let doc = LineBuffer::from_bytes(&bytes).map_err(|source| {
            tracing::error!(target: "io", path = %self.path.display(), error = %source, "file_decode_error");
            GatewayError::Decode {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            target: "io",
            path = %self.path.display(),
            bytes = bytes.len(),
            lines = doc.line_count(),
            "file_loaded"
        );
        Ok((doc, bytes.len()))
    }
}

impl PersistenceGateway for FileGateway {
    fn write(&mut self, document: &LineBuffer) -> Result<usize, GatewayError> {
        let bytes = document.to_bytes();
        match overwrite(&mut self.file, &bytes) {
            Ok(()) => {
                tracing::debug!(target: "io", path = %self.path.display(), bytes = bytes.len(), "file_written");
                Ok(bytes.len())
            }
            Err(e) => {
                tracing::error!(target: "io", path = %self.path.display(), error = %e, "file_write_error");
                Err(GatewayError::Write(e))
            }
        }
    }
}

fn overwrite(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.sync_all()
}
