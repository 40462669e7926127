use crate::order::Order;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Banner plus a numbered section per order.
    Batch,
    /// One order on its own, no banner or numbering.
    Single,
}

/// Render `orders` as aligned text tables. Output has no trailing newline.
pub fn render(orders: &[Order], mode: ReportMode) -> String {
    if orders.is_empty() {
        return format!("{} No orders", crate::prompt::NOTICE_PREFIX);
    }

    let mut lines: Vec<String> = Vec::new();
    if mode == ReportMode::Batch {
        lines.push(String::new());
        lines.push(banner("Order Report"));
    }
    for (idx, order) in orders.iter().enumerate() {
        if mode == ReportMode::Batch {
            lines.push(String::new());
            lines.push(format!("Order #{}", idx + 1));
        }
        push_order(&mut lines, order);
    }
    lines.join("\n")
}

/// Center `title` in a line of `=` the width of the report.
pub fn banner(title: &str) -> String {
    format!("{:=^width$}", format!(" {title} "), width = RULE_WIDTH)
}

fn push_order(lines: &mut Vec<String>, order: &Order) {
    let rule = "-".repeat(RULE_WIDTH);
    lines.push(format!("Order ID: {}", order.order_id));
    lines.push(format!("Customer: {}", order.customer));
    lines.push(rule.clone());
    lines.push(format!(
        "{:<10}{:>8}{:>8}{:>10}",
        "Item", "Price", "Qty", "Subtotal"
    ));
    lines.push(rule.clone());
    for item in &order.items {
        lines.push(format!(
            "{:<10}{:>8}{:>8}{:>10}",
            item.name,
            item.price,
            item.quantity,
            item.subtotal()
        ));
    }
    lines.push(rule);
    lines.push(format!("Total: {}", order.total()));
    lines.push("=".repeat(RULE_WIDTH));
}
