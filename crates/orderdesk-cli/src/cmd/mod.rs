pub mod list;
pub mod report;
pub mod session;

use anyhow::Context;
use orderdesk_core::{config::Config, store::JsonFileStore};
use std::path::Path;

/// The pending or completed store for `root`, honouring `orderdesk.yaml`.
pub fn open_store(root: &Path, completed: bool) -> anyhow::Result<JsonFileStore> {
    let config = Config::load(root).context("failed to read orderdesk.yaml")?;
    let path = if completed {
        config.completed_path(root)
    } else {
        config.pending_path(root)
    };
    Ok(JsonFileStore::new(path))
}
