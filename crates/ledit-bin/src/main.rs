//! ledit entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Editor, FileGateway, PersistenceGateway, SessionOptions, Step};
use core_config::{Config, ConfigContext, load_from};
use core_events::{Event, InputEvent};
use core_render::{RenderView, ScreenLayout, Writer};
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "ledit.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "ledit", version, about = "Modal line editor")]
struct Args {
    /// File to edit. It must exist; it is opened read-write for the whole session.
    pub path: PathBuf,
    /// Start with the debug line shown.
    #[arg(short, long)]
    pub verbose: bool,
    /// Optional configuration file path (overrides discovery of `ledit.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn session_options(args: &Args, config: &Config) -> SessionOptions {
    SessionOptions {
        height: config.text_height as usize,
        tab_width: config.tab_width(),
        verbose: args.verbose || config.file.editor.verbose,
    }
}

fn paint(view: &RenderView, config: &Config, (columns, rows): (u16, u16)) -> Result<()> {
    let mut writer = Writer::new();
    writer.paint(
        view,
        ScreenLayout {
            columns,
            rows,
            text_rows: config.text_height,
        },
    );
    writer.flush()
}

/// Paint, wait for one event, feed it to the editor. Returns when the session
/// ends (`:q`) or on Ctrl-C; other termination signals are handled by
/// `SignalGuard`.
fn run_loop<G: PersistenceGateway>(
    editor: &mut Editor<G>,
    config: &mut Config,
    mut size: (u16, u16),
) -> Result<()> {
    let mut view = editor.render();
    loop {
        paint(&view, config, size)?;
        match core_input::read_event()? {
            Event::Input(InputEvent::Key(key)) => match editor.handle(key) {
                Step::Continue(next) => view = next,
                Step::EndOfSession => break,
            },
            Event::Resize(w, h) => {
                size = (w, h);
                view = match config.recompute_with_context(ConfigContext::new(w, h)) {
                    Some(height) => editor.resize(height as usize),
                    None => editor.render(),
                };
            }
            Event::Shutdown => {
                info!(target: "runtime", "interrupted");
                break;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = AppStartup::new();
    app.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let mut gateway = FileGateway::open(&args.path)
        .with_context(|| format!("opening {}", args.path.display()))?;
    let (buffer, bytes) = gateway.read_document()?;

    let mut config = load_from(args.config.clone())?;
    let size = app.backend.size()?;
    config.apply_context(ConfigContext::new(size.0, size.1));

    info!(
        target: "runtime.startup",
        path = %args.path.display(),
        lines = buffer.line_count(),
        bytes,
        config = ?config.source,
        text_height = config.text_height,
        "bootstrap_complete"
    );

    let mut editor = Editor::new(buffer, gateway, session_options(&args, &config));
    editor.announce_file(&args.path, bytes);

    app.backend.set_title("ledit")?;
    let _guard = app.backend.enter_guard()?;
    #[cfg(unix)]
    let _signals = core_terminal::SignalGuard::install()?;
    let result = run_loop(&mut editor, &mut config, size);
    info!(target: "runtime", ok = result.is_ok(), "shutdown");
    result
}
