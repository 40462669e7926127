use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File name constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "orderdesk.yaml";
pub const PENDING_FILE: &str = "orders.json";
pub const COMPLETED_FILE: &str = "output_orders.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn pending_path(root: &Path) -> PathBuf {
    root.join(PENDING_FILE)
}

pub fn completed_path(root: &Path) -> PathBuf {
    root.join(COMPLETED_FILE)
}
