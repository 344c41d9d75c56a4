use crate::error::{ListError, Result};
use crate::item::{Item, Price};
use serde::Serialize;

/// Storage contract for the shopping list.
///
/// `add` and `update` take the raw field text because input validation is
/// part of the store's contract: an empty name or price is rejected with
/// `ValidationError`, unparsable price text with `PriceError`, and in both
/// cases the list is left untouched.
pub trait ItemStore {
    /// All items in insertion order. No side effects.
    fn items(&self) -> &[Item];

    /// Validates the input, assigns the next id and appends a new item.
    fn add(&mut self, name: &str, price: &str) -> Result<Item>;

    /// Linear scan for the item with the given id.
    fn get(&self, id: u32) -> Option<&Item>;

    /// Overwrites name and price of the current item in place.
    ///
    /// Fails with `SelectionError` when no current item is set. The item's
    /// id and position in the list are preserved.
    fn update(&mut self, name: &str, price: &str) -> Result<Item>;

    /// Marks the item with the given id as the one being edited.
    ///
    /// The id is not checked against the list; `current` resolves it lazily.
    fn set_current(&mut self, id: u32);

    /// The item selected for editing, if any.
    fn current(&self) -> Option<&Item>;

    /// Removes the item with the given id; no-op when absent.
    fn delete(&mut self, id: u32);

    /// Empties the list.
    fn clear(&mut self);

    /// Recomputes the sum of all present prices.
    fn total_price(&mut self) -> i64;
}

/// The in-memory shopping list.
///
/// Items live in a `Vec` so insertion order is display order. The current
/// item is held as an id rather than an index, and is cleared by any
/// mutation that could invalidate it (deleting that item, clearing the
/// list), so a stale selection is never observable.
#[derive(Debug, Default, Serialize)]
pub struct InMemoryStore {
    items: Vec<Item>,
    current: Option<u32>,
    /// Last value computed by `total_price`, kept for inspection (`--dump`).
    /// The return value of `total_price` is the authoritative one.
    total_price: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u32 {
        // Last element's id + 1, not max + 1: matches insertion order being
        // append-only, and deleting a middle item leaves later ids untouched.
        self.items.last().map_or(0, |item| item.id + 1)
    }

    fn parse_input(name: &str, price: &str) -> Result<Price> {
        if name.is_empty() {
            return Err(ListError::ValidationError(
                "item name must not be empty".to_string(),
            ));
        }
        if price.is_empty() {
            return Err(ListError::ValidationError(
                "item price must not be empty".to_string(),
            ));
        }
        Price::parse(price)
    }
}

impl ItemStore for InMemoryStore {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn add(&mut self, name: &str, price: &str) -> Result<Item> {
        let price = Self::parse_input(name, price)?;
        let item = Item::new(self.next_id(), name, price);
        self.items.push(item.clone());
        Ok(item)
    }

    fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn update(&mut self, name: &str, price: &str) -> Result<Item> {
        let price = Self::parse_input(name, price)?;
        let id = self.current.ok_or_else(|| {
            ListError::SelectionError("no item selected for update".to_string())
        })?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| {
                ListError::SelectionError(format!("selected item {id} is no longer in the list"))
            })?;
        item.name = name.to_string();
        item.price = price;
        Ok(item.clone())
    }

    fn set_current(&mut self, id: u32) {
        self.current = Some(id);
    }

    fn current(&self) -> Option<&Item> {
        self.current.and_then(|id| self.get(id))
    }

    fn delete(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
        if self.current == Some(id) {
            self.current = None;
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }

    fn total_price(&mut self) -> i64 {
        let total = self.items.iter().map(|item| item.price.value()).sum();
        self.total_price = total;
        total
    }
}
