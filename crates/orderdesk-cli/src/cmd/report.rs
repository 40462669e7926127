use crate::output::print_json;
use anyhow::Context;
use orderdesk_core::report::{self, ReportMode};
use orderdesk_core::store::OrderStore;
use std::path::Path;

pub fn run(root: &Path, completed: bool, json: bool) -> anyhow::Result<()> {
    let store = super::open_store(root, completed)?;
    let orders = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    if json {
        return print_json(&orders);
    }
    println!("{}", report::render(&orders, ReportMode::Batch));
    Ok(())
}
