use crate::output::{print_json, print_table};
use anyhow::Context;
use orderdesk_core::store::OrderStore;
use std::path::Path;

pub fn run(root: &Path, completed: bool, json: bool) -> anyhow::Result<()> {
    let store = super::open_store(root, completed)?;
    let orders = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    if json {
        print_json(&orders)?;
        return Ok(());
    }

    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = orders
        .iter()
        .enumerate()
        .map(|(i, o)| {
            vec![
                (i + 1).to_string(),
                o.order_id.clone(),
                o.customer.clone(),
                o.items.len().to_string(),
                o.total().to_string(),
            ]
        })
        .collect();
    print_table(&["POS", "ORDER ID", "CUSTOMER", "ITEMS", "TOTAL"], rows);
    Ok(())
}
