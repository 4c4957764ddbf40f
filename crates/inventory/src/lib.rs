//! Inventory domain module.
//!
//! This crate contains the in-memory SKU catalog and its business rules,
//! implemented purely as deterministic domain logic (no IO, no persistence).
//! Notices are emitted as `tracing` events; rendering reports to text or JSON
//! is left to the caller.

pub mod inventory;
pub mod item;
pub mod report;

pub use inventory::{
    DeleteItem, Inventory, InventoryCommand, InventoryEvent, InsertItem, ItemDeleted,
    ItemInserted, ItemRestocked, ItemSold, PriceUpdated, RestockItem, SellItem, UpdatePrice,
};
pub use item::Item;
pub use report::{
    ColumnView, DEFAULT_SPARSE_THRESHOLD, InventorySummary, LowStockReport, PriceQuantityRow,
    PriceQuantityTable, SparseEntry, SparseRepresentation,
};
