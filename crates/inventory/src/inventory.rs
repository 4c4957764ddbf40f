use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, DomainError, DomainResult, Entity, ItemId};

use crate::item::Item;

/// Ordered, exclusively-owned collection of [`Item`]s.
///
/// Order is insertion order; deleting an item shifts the rest left. Item ids
/// are pairwise distinct. Id-keyed operations scan linearly, which is fine
/// for small catalogs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

/// Command: InsertItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertItem {
    pub item: Item,
}

/// Command: DeleteItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub item_id: ItemId,
}

/// Command: RestockItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockItem {
    pub item_id: ItemId,
    pub quantity: i64,
    pub new_price: Option<f64>,
}

/// Command: SellItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellItem {
    pub item_id: ItemId,
    pub quantity: i64,
}

/// Command: UpdatePrice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePrice {
    pub item_id: ItemId,
    pub new_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    InsertItem(InsertItem),
    DeleteItem(DeleteItem),
    RestockItem(RestockItem),
    SellItem(SellItem),
    UpdatePrice(UpdatePrice),
}

impl InventoryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            InventoryCommand::InsertItem(_) => "insert",
            InventoryCommand::DeleteItem(_) => "delete",
            InventoryCommand::RestockItem(_) => "restock",
            InventoryCommand::SellItem(_) => "sell",
            InventoryCommand::UpdatePrice(_) => "update_price",
        }
    }
}

/// Event: ItemInserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInserted {
    pub item: Item,
}

/// Event: ItemDeleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDeleted {
    pub index: usize,
    pub item_id: ItemId,
}

/// Event: ItemRestocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRestocked {
    pub item_id: ItemId,
    pub quantity_added: i64,
    pub new_price: Option<f64>,
}

/// Event: ItemSold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSold {
    pub item_id: ItemId,
    pub quantity_sold: i64,
}

/// Event: PriceUpdated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdated {
    pub item_id: ItemId,
    pub new_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemInserted(ItemInserted),
    ItemDeleted(ItemDeleted),
    ItemRestocked(ItemRestocked),
    ItemSold(ItemSold),
    PriceUpdated(PriceUpdated),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemInserted(_) => "inventory.item.inserted",
            InventoryEvent::ItemDeleted(_) => "inventory.item.deleted",
            InventoryEvent::ItemRestocked(_) => "inventory.item.restocked",
            InventoryEvent::ItemSold(_) => "inventory.item.sold",
            InventoryEvent::PriceUpdated(_) => "inventory.item.price_updated",
        }
    }

    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::ItemInserted(e) => e.item.item_id,
            InventoryEvent::ItemDeleted(e) => e.item_id,
            InventoryEvent::ItemRestocked(e) => e.item_id,
            InventoryEvent::ItemSold(e) => e.item_id,
            InventoryEvent::PriceUpdated(e) => e.item_id,
        }
    }

    /// The command that, decided against the current state, yields this event.
    fn as_command(&self) -> InventoryCommand {
        match self {
            InventoryEvent::ItemInserted(e) => {
                InventoryCommand::InsertItem(InsertItem { item: e.item.clone() })
            }
            InventoryEvent::ItemDeleted(e) => {
                InventoryCommand::DeleteItem(DeleteItem { item_id: e.item_id })
            }
            InventoryEvent::ItemRestocked(e) => InventoryCommand::RestockItem(RestockItem {
                item_id: e.item_id,
                quantity: e.quantity_added,
                new_price: e.new_price,
            }),
            InventoryEvent::ItemSold(e) => InventoryCommand::SellItem(SellItem {
                item_id: e.item_id,
                quantity: e.quantity_sold,
            }),
            InventoryEvent::PriceUpdated(e) => InventoryCommand::UpdatePrice(UpdatePrice {
                item_id: e.item_id,
                new_price: e.new_price,
            }),
        }
    }

    fn notice(&self) -> &'static str {
        match self {
            InventoryEvent::ItemInserted(_) => "item added successfully",
            InventoryEvent::ItemDeleted(_) => "item deleted successfully",
            InventoryEvent::ItemRestocked(_) => "restocked successfully",
            InventoryEvent::ItemSold(_) => "sale recorded",
            InventoryEvent::PriceUpdated(_) => "price updated",
        }
    }
}

fn ensure_price(price: f64) -> DomainResult<()> {
    // Rejects NaN as well as negatives.
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidPrice(price))
    }
}

fn ensure_positive_quantity(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in sequence order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id without emitting any notice.
    pub fn get(&self, item_id: impl Into<ItemId>) -> Option<&Item> {
        let item_id = item_id.into();
        self.items.iter().find(|it| *it.id() == item_id)
    }

    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|it| *it.id() == item_id)
    }

    fn find_mut(&mut self, item_id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|it| it.item_id == item_id)
    }

    fn require(&self, item_id: ItemId) -> DomainResult<&Item> {
        self.get(item_id).ok_or_else(|| DomainError::not_found(item_id))
    }

    /// Run a command: decide, apply, and emit a notice for the outcome.
    ///
    /// On error nothing has been applied.
    pub fn execute(&mut self, command: InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        match self.decide_and_apply(&command) {
            Ok(events) => {
                for event in &events {
                    tracing::info!(
                        event_type = event.event_type(),
                        item_id = %event.item_id(),
                        "{}",
                        event.notice()
                    );
                }
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(
                    operation = command.name(),
                    code = err.code(),
                    error = %err,
                    "{} failed",
                    command.name()
                );
                Err(err)
            }
        }
    }

    /// Append `item`; rejected if its id is already present.
    pub fn insert(&mut self, item: Item) -> DomainResult<()> {
        self.execute(InventoryCommand::InsertItem(InsertItem { item }))
            .map(|_| ())
    }

    /// Remove the item with `item_id`, keeping the order of the rest.
    pub fn delete(&mut self, item_id: impl Into<ItemId>) -> DomainResult<()> {
        self.execute(InventoryCommand::DeleteItem(DeleteItem {
            item_id: item_id.into(),
        }))
        .map(|_| ())
    }

    /// Add `quantity` units and optionally overwrite the price.
    pub fn restock(
        &mut self,
        item_id: impl Into<ItemId>,
        quantity: i64,
        new_price: Option<f64>,
    ) -> DomainResult<()> {
        self.execute(InventoryCommand::RestockItem(RestockItem {
            item_id: item_id.into(),
            quantity,
            new_price,
        }))
        .map(|_| ())
    }

    pub fn sell(&mut self, item_id: impl Into<ItemId>, quantity: i64) -> DomainResult<()> {
        self.execute(InventoryCommand::SellItem(SellItem {
            item_id: item_id.into(),
            quantity,
        }))
        .map(|_| ())
    }

    pub fn update_price(&mut self, item_id: impl Into<ItemId>, new_price: f64) -> DomainResult<()> {
        self.execute(InventoryCommand::UpdatePrice(UpdatePrice {
            item_id: item_id.into(),
            new_price,
        }))
        .map(|_| ())
    }

    /// Find an item by id text or by case-insensitive name.
    ///
    /// The key's text form is trimmed and lowercased, then compared against
    /// each item's id text and lowercased name. The first item in sequence
    /// order matching either wins, so an item literally named "102" can shadow
    /// a later item whose id is 102.
    pub fn search(&self, key: impl core::fmt::Display) -> DomainResult<&Item> {
        let needle = key.to_string().trim().to_lowercase();

        let found = self
            .items
            .iter()
            .find(|it| it.item_id.to_string() == needle || it.name.to_lowercase() == needle);

        match found {
            Some(item) => {
                item.display();
                Ok(item)
            }
            None => {
                tracing::warn!(key = %needle, code = "not_found", "item not found");
                Err(DomainError::not_found(needle))
            }
        }
    }

    fn handle_insert(&self, cmd: &InsertItem) -> DomainResult<Vec<InventoryEvent>> {
        let item = &cmd.item;
        if self.items.iter().any(|it| it.same_identity(item)) {
            return Err(DomainError::DuplicateKey(item.item_id));
        }
        if item.quantity < 0 {
            return Err(DomainError::InvalidQuantity(item.quantity));
        }
        ensure_price(item.price)?;

        Ok(vec![InventoryEvent::ItemInserted(ItemInserted {
            item: item.clone(),
        })])
    }

    fn handle_delete(&self, cmd: &DeleteItem) -> DomainResult<Vec<InventoryEvent>> {
        let index = self
            .position(cmd.item_id)
            .ok_or_else(|| DomainError::not_found(cmd.item_id))?;

        Ok(vec![InventoryEvent::ItemDeleted(ItemDeleted {
            index,
            item_id: cmd.item_id,
        })])
    }

    fn handle_restock(&self, cmd: &RestockItem) -> DomainResult<Vec<InventoryEvent>> {
        ensure_positive_quantity(cmd.quantity)?;
        if let Some(price) = cmd.new_price {
            ensure_price(price)?;
        }

        let item = self.require(cmd.item_id)?;
        if item.quantity.checked_add(cmd.quantity).is_none() {
            return Err(DomainError::InvalidQuantity(cmd.quantity));
        }

        Ok(vec![InventoryEvent::ItemRestocked(ItemRestocked {
            item_id: cmd.item_id,
            quantity_added: cmd.quantity,
            new_price: cmd.new_price,
        })])
    }

    fn handle_sell(&self, cmd: &SellItem) -> DomainResult<Vec<InventoryEvent>> {
        ensure_positive_quantity(cmd.quantity)?;

        let item = self.require(cmd.item_id)?;
        if item.quantity < cmd.quantity {
            return Err(DomainError::InsufficientStock {
                item_id: cmd.item_id,
                requested: cmd.quantity,
                available: item.quantity,
            });
        }

        Ok(vec![InventoryEvent::ItemSold(ItemSold {
            item_id: cmd.item_id,
            quantity_sold: cmd.quantity,
        })])
    }

    fn handle_update_price(&self, cmd: &UpdatePrice) -> DomainResult<Vec<InventoryEvent>> {
        ensure_price(cmd.new_price)?;
        self.require(cmd.item_id)?;

        Ok(vec![InventoryEvent::PriceUpdated(PriceUpdated {
            item_id: cmd.item_id,
            new_price: cmd.new_price,
        })])
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        // Events are re-decided against the current state, so one built by hand
        // cannot introduce a duplicate id or a negative quantity or price.
        if let Err(err) = self.handle(&event.as_command()) {
            tracing::warn!(
                event_type = event.event_type(),
                item_id = %event.item_id(),
                code = err.code(),
                error = %err,
                "event rejected"
            );
            return;
        }

        match event {
            InventoryEvent::ItemInserted(e) => {
                self.items.push(e.item.clone());
            }
            InventoryEvent::ItemDeleted(e) => {
                let index = match self.items.get(e.index) {
                    Some(it) if it.item_id == e.item_id => Some(e.index),
                    _ => self.position(e.item_id),
                };
                if let Some(index) = index {
                    self.items.remove(index);
                }
            }
            InventoryEvent::ItemRestocked(e) => {
                if let Some(item) = self.find_mut(e.item_id) {
                    item.quantity += e.quantity_added;
                    if let Some(price) = e.new_price {
                        item.price = price;
                    }
                }
            }
            InventoryEvent::ItemSold(e) => {
                if let Some(item) = self.find_mut(e.item_id) {
                    item.quantity -= e.quantity_sold;
                }
            }
            InventoryEvent::PriceUpdated(e) => {
                if let Some(item) = self.find_mut(e.item_id) {
                    item.price = e.new_price;
                }
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::InsertItem(cmd) => self.handle_insert(cmd),
            InventoryCommand::DeleteItem(cmd) => self.handle_delete(cmd),
            InventoryCommand::RestockItem(cmd) => self.handle_restock(cmd),
            InventoryCommand::SellItem(cmd) => self.handle_sell(cmd),
            InventoryCommand::UpdatePrice(cmd) => self.handle_update_price(cmd),
        }
    }
}
