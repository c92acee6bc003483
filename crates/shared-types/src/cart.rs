use std::collections::HashMap;

use crate::error::AppError;
use crate::menu::{format_amount, MenuItem};
use crate::order::{CreateOrderRequest, NewOrderItem};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    /// `None` when the item's price is not numeric.
    pub fn line_total(&self) -> Option<f64> {
        self.item.price.value().map(|p| p * f64::from(self.quantity))
    }
}

/// In-memory cart used by the waiter and client dashboards. Lines keep the
/// order in which items were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit; repeated adds bump the quantity of the existing line.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item: item.clone(),
                quantity: 1,
            }),
        }
    }

    /// Drop the whole line for this item.
    pub fn remove(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take an accepted order out of the cart. Units added after the order
    /// was built stay in the cart.
    pub fn take_submitted(&mut self, items: &[NewOrderItem]) {
        for sent in items {
            if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == sent.product_id) {
                line.quantity = line.quantity.saturating_sub(sent.quantity);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of the numeric line totals. Non-numeric prices count as zero.
    pub fn total(&self) -> f64 {
        self.lines.iter().filter_map(CartLine::line_total).sum()
    }

    pub fn total_display(&self) -> String {
        format_amount(Some(self.total()))
    }

    /// Build the `/create-order` payload. Empty carts are rejected.
    pub fn to_order(&self, user_id: &str) -> Result<CreateOrderRequest, AppError> {
        if self.is_empty() {
            let mut fields = HashMap::new();
            fields.insert("items".to_string(), "The cart is empty".to_string());
            return Err(AppError::validation("The cart is empty", fields));
        }
        let items = self
            .lines
            .iter()
            .map(|l| NewOrderItem {
                product_id: l.item.id.clone(),
                quantity: l.quantity,
                price: l.item.price.value(),
            })
            .collect();
        Ok(CreateOrderRequest {
            user_id: user_id.to_string(),
            items,
        })
    }
}
