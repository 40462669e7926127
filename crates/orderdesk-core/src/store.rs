use crate::error::Result;
use crate::order::Order;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// A named, ordered collection of orders.
pub trait OrderStore {
    /// Read every stored order. A store that was never written is empty.
    fn load(&self) -> Result<Vec<Order>>;

    /// Replace the stored orders with `orders`.
    fn save(&self, orders: &[Order]) -> Result<()>;

    /// Add `order` after the existing ones.
    fn append(&self, order: Order) -> Result<()> {
        let mut orders = self.load()?;
        orders.push(order);
        self.save(&orders)
    }
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// Orders kept as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Order>> {
        let Some(data) = crate::io::read_if_exists(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "store missing, starting empty");
            return Ok(Vec::new());
        };
        let orders: Vec<Order> = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), count = orders.len(), "loaded store");
        Ok(orders)
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        let data = to_json_pretty(orders)?;
        crate::io::atomic_write(&self.path, &data)?;
        tracing::debug!(path = %self.path.display(), count = orders.len(), "saved store");
        Ok(())
    }
}

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store for tests and dry runs. Counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: RefCell<Vec<Order>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RefCell::new(orders),
            saves: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.borrow().clone()
    }

    /// Number of `save` calls so far, including those made by `append`.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl OrderStore for MemoryStore {
    fn load(&self) -> Result<Vec<Order>> {
        Ok(self.snapshot())
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        *self.orders.borrow_mut() = orders.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: OrderStore + ?Sized> OrderStore for &S {
    fn load(&self) -> Result<Vec<Order>> {
        (**self).load()
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        (**self).save(orders)
    }

    fn append(&self, order: Order) -> Result<()> {
        (**self).append(order)
    }
}
