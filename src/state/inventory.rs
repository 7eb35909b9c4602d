//! Inventory list state backing the dashboard table.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::net::types::Vehicle;

/// The vehicle list plus the initial-load indicator.
///
/// `loading` starts true so the placeholder shows until the first fetch
/// settles; it is cleared on both success and failure. The list is only ever
/// replaced wholesale — records are never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryState {
    pub vehicles: Vec<Vehicle>,
    pub loading: bool,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            loading: true,
        }
    }
}

impl InventoryState {
    /// Replace the whole list with a fresh fetch result and clear `loading`.
    pub fn replace(&mut self, vehicles: Vec<Vehicle>) {
        self.vehicles = vehicles;
        self.loading = false;
    }

    /// Record a failed load: the list stays empty and `loading` clears so
    /// the placeholder does not stick.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }
}
