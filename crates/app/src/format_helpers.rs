//! Shared formatting utilities for the UI layer.

use shared_types::{OrderItem, OrderStatus, Role};
use shared_ui::Tone;

/// Badge colour for an order status.
pub fn status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Pending => Tone::Caution,
        OrderStatus::InPreparation => Tone::Accent,
        OrderStatus::Ready => Tone::Positive,
    }
}

/// Badge colour for a role.
pub fn role_tone(role: Role) -> Tone {
    match role {
        Role::Admin => Tone::Critical,
        Role::Kitchen => Tone::Caution,
        Role::Waiter => Tone::Accent,
        Role::Client => Tone::Neutral,
    }
}

/// One line of an order, e.g. "Taco – 2, 3.50".
pub fn order_line(item: &OrderItem) -> String {
    format!(
        "{} – {}, {}",
        item.display_name(),
        item.quantity,
        item.price.display()
    )
}

/// Label of the action that moves an order to its next status.
pub fn advance_label(status: OrderStatus) -> Option<&'static str> {
    match status.next()? {
        OrderStatus::InPreparation => Some("Start preparing"),
        OrderStatus::Ready => Some("Mark ready"),
        OrderStatus::Pending => None,
    }
}

/// Shorten an opaque id for table cells.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
