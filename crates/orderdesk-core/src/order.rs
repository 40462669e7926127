use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LineItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: u64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer: String,
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn new(order_id: &str, customer: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            order_id: normalize_order_id(order_id),
            customer: customer.into(),
            items,
        }
    }

    /// Sum of `price * quantity` over all items.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.subtotal()))
    }
}

/// Order ids are compared trimmed and uppercased.
pub fn normalize_order_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ---------------------------------------------------------------------------
// Pending list operations
// ---------------------------------------------------------------------------

pub fn contains_id(orders: &[Order], order_id: &str) -> bool {
    orders.iter().any(|o| o.order_id == order_id)
}

/// Append `order` to the pending list.
///
/// Fails without touching `orders` when the id is already present or the
/// order has no items.
pub fn add_order(orders: &mut Vec<Order>, order: Order) -> Result<()> {
    if contains_id(orders, &order.order_id) {
        return Err(OrderError::DuplicateOrderId(order.order_id));
    }
    if order.items.is_empty() {
        return Err(OrderError::EmptyOrder(order.order_id));
    }
    orders.push(order);
    Ok(())
}

/// Remove the order at 1-based `position`, shifting later orders down.
pub fn take_at(orders: &mut Vec<Order>, position: usize) -> Result<Order> {
    if position == 0 || position > orders.len() {
        return Err(OrderError::SelectionOutOfRange {
            position,
            len: orders.len(),
        });
    }
    Ok(orders.remove(position - 1))
}
