use crate::error::Result;
use crate::order::{self, Order};
use crate::prompt::{self, Prompter, Selection};
use crate::store::OrderStore;
use std::fmt;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillOutcome {
    NothingPending,
    Cancelled,
    Fulfilled(Order),
}

impl FulfillOutcome {
    pub fn order(&self) -> Option<&Order> {
        match self {
            FulfillOutcome::Fulfilled(order) => Some(order),
            _ => None,
        }
    }
}

impl fmt::Display for FulfillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillOutcome::NothingPending => f.write_str("No pending orders"),
            FulfillOutcome::Cancelled => f.write_str("Fulfillment cancelled"),
            FulfillOutcome::Fulfilled(order) => {
                write!(f, "Order {} fulfilled", order.order_id)
            }
        }
    }
}

/// Let the operator pick a pending order and move it to `completed`.
///
/// Nothing is written on cancel. If the append to `completed` fails the
/// order goes back to its old position before the error is returned.
pub fn fulfill<R, W, S>(
    p: &mut Prompter<R, W>,
    pending: &mut Vec<Order>,
    completed: &S,
) -> Result<FulfillOutcome>
where
    R: BufRead,
    W: Write,
    S: OrderStore + ?Sized,
{
    if pending.is_empty() {
        return Ok(FulfillOutcome::NothingPending);
    }

    p.say("")?;
    p.say("======== Pending Orders ========")?;
    for (idx, order) in pending.iter().enumerate() {
        p.say(&format!(
            "{}. Order ID: {} - Customer: {}",
            idx + 1,
            order.order_id,
            order.customer
        ))?;
    }
    p.say("================================")?;

    let len = pending.len();
    let selection = p.ask_until(
        "Select an order to fulfill (number, Enter to cancel): ",
        |answer| prompt::parse_selection(answer, len),
    )?;
    let Selection::Position(position) = selection else {
        return Ok(FulfillOutcome::Cancelled);
    };

    let order = order::take_at(pending, position)?;
    if let Err(e) = completed.append(order.clone()) {
        tracing::warn!(order_id = %order.order_id, error = %e, "append to completed store failed, restoring");
        pending.insert(position - 1, order);
        return Err(e);
    }
    tracing::info!(order_id = %order.order_id, "order fulfilled");
    Ok(FulfillOutcome::Fulfilled(order))
}
