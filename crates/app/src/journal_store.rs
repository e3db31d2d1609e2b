//! Where the desktop app keeps its run journal.

use std::io;
use std::path::{Path, PathBuf};

use core::journal_file::JournalWriter;
use directories::ProjectDirs;

use crate::APP_NAME;

/// Per-user location of the current run's journal, or `None` when the
/// platform exposes no home directory.
pub fn default_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| {
        let mut path = dirs.data_dir().to_path_buf();
        path.push("last_run.jsonl");
        path
    })
}

/// Start a fresh journal for this run, stamping the build version into the
/// header.
pub fn create_run_journal(path: &Path, seed: u64, scenario_name: &str) -> io::Result<JournalWriter> {
    JournalWriter::create(path, seed, scenario_name, env!("CARGO_PKG_VERSION"))
}
