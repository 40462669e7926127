use crate::error::{OrderError, Result};
use crate::order::{self, LineItem, Order};
use crate::prompt::{self, Prompter};
use std::fmt;
use std::io::{BufRead, Write};

/// Result of one interactive "add order" run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    DuplicateId(String),
    NoItems,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added(id) => write!(f, "Order {id} added!"),
            AddOutcome::DuplicateId(id) => write!(f, "Error: order id {id} already exists!"),
            AddOutcome::NoItems => f.write_str("An order needs at least one item"),
        }
    }
}

/// Collect a new order from the operator and append it to `pending`.
///
/// The id is checked before anything else is asked. `pending` is only
/// touched when the outcome is [`AddOutcome::Added`].
pub fn build_order<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    pending: &mut Vec<Order>,
) -> Result<AddOutcome> {
    let order_id = order::normalize_order_id(&p.ask("Order id: ")?);
    if order::contains_id(pending, &order_id) {
        return Ok(AddOutcome::DuplicateId(order_id));
    }

    let customer = p.ask("Customer name: ")?;
    let mut items = Vec::new();
    loop {
        let name = p.ask("Item name (blank to finish): ")?;
        if name.is_empty() {
            break;
        }
        let price = p.ask_until("Price: ", prompt::parse_price)?;
        let quantity = p.ask_until("Quantity: ", prompt::parse_quantity)?;
        items.push(LineItem::new(name, price, quantity));
    }

    match order::add_order(pending, Order::new(&order_id, customer, items)) {
        Ok(()) => {
            tracing::info!(order_id = %order_id, "order added");
            Ok(AddOutcome::Added(order_id))
        }
        Err(OrderError::DuplicateOrderId(id)) => Ok(AddOutcome::DuplicateId(id)),
        Err(OrderError::EmptyOrder(_)) => Ok(AddOutcome::NoItems),
        Err(e) => Err(e),
    }
}
