use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use directories_next::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use fileDen::app::settings::{self, Settings, DEFAULT_ROOT};
use fileDen::app::App;
use fileDen::fs_op::FileStore;
use fileDen::runner;

/// A small file manager confined to a single root directory.
#[derive(Debug, Parser)]
#[command(name = "fileDen", version)]
struct Args {
    /// Root directory to manage. Defaults to the configured root, or
    /// ./file_manager_root when nothing is configured.
    root: Option<PathBuf>,

    /// Persist the chosen root directory as the default for future runs.
    #[arg(long)]
    remember: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging();

    let settings = settings::load_settings();
    let root = args
        .root
        .clone()
        .or_else(|| settings.root_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

    let store = FileStore::open(&root)
        .with_context(|| format!("opening store rooted at {}", root.display()))?;
    tracing::info!(root = %store.root().display(), "store opened");

    if args.remember {
        let updated = Settings {
            root_dir: Some(store.root().to_path_buf()),
        };
        if let Err(e) = settings::save_settings(&updated) {
            tracing::warn!(error = %e, "could not persist settings");
        }
    }

    let mut app = App::new(store)?;
    runner::run_app(&mut app)
}

// The TUI owns the terminal, so logs go to a file under the cache dir
// (fall back to the system temp dir). The guard must stay alive for the
// non-blocking writer to flush.
fn init_logging() -> Option<WorkerGuard> {
    let dir = ProjectDirs::from("", "", "fileDen")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "fileDen.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
