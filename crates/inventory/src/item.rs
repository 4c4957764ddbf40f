use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

/// One stock-keeping unit: identity plus mutable stock and price.
///
/// The id never changes once the item exists. Quantity and price are only
/// changed through [`crate::Inventory`] operations, which keep both
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) item_id: ItemId,
    pub(crate) name: String,
    pub(crate) quantity: i64,
    pub(crate) price: f64,
}

impl Item {
    pub fn new(item_id: impl Into<ItemId>, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Quantity × price for this line.
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Emit the item's one-line rendering as a notice.
    pub fn display(&self) {
        tracing::info!(item_id = %self.item_id, "{}", self);
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.item_id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Qty: {}, Price: {:.2}",
            self.item_id, self.name, self.quantity, self.price
        )
    }
}
