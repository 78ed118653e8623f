use std::fmt;

use crate::shopping::parse_quantity_str;

/// One displayable line of a shopping list
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl fmt::Display for ShoppingListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.quantity, self.unit)
    }
}

/// Raw manual shopping-list input, exactly as the user typed it
#[derive(Debug, Clone, Default)]
pub struct ManualEntry {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl ManualEntry {
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Turn the input into a list entry, or `None` if any field is blank
    ///
    /// Blank fields are checked before the quantity is parsed. Name and unit
    /// are trimmed on acceptance.
    pub fn validate(&self) -> Option<ShoppingListEntry> {
        let name = self.name.trim();
        let quantity = self.quantity.trim();
        let unit = self.unit.trim();

        if name.is_empty() || quantity.is_empty() || unit.is_empty() {
            return None;
        }

        Some(ShoppingListEntry {
            name: name.to_string(),
            quantity: parse_quantity_str(&self.quantity),
            unit: unit.to_string(),
        })
    }
}
