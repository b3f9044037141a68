//! Termination-signal guard.
//!
//! In raw mode Ctrl-C arrives as a key, but SIGTERM or SIGHUP sent from
//! outside kill the process without unwinding, so `TerminalGuard::drop`
//! never runs. A listener thread restores the terminal itself and exits.

use anyhow::Result;
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use std::thread::JoinHandle;

pub const TERMINATION_SIGNALS: [i32; 3] = [SIGINT, SIGTERM, SIGHUP];

/// Shell convention for "terminated by signal N".
pub fn exit_code(signal: i32) -> i32 {
    128 + signal
}

#[derive(Debug)]
pub struct SignalGuard {
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalGuard {
    pub fn install() -> Result<Self> {
        let mut signals = Signals::new(TERMINATION_SIGNALS)?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("ledit-signals".into())
            .spawn(move || {
                if let Some(signal) = signals.forever().next() {
                    tracing::warn!(target: "runtime", signal, "termination_signal");
                    crate::restore_terminal();
                    std::process::exit(exit_code(signal));
                }
            })?;
        tracing::debug!(target: "runtime", "signal_guard_installed");
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
