use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::menu::{format_amount, Price};

// ── Status pipeline ─────────────────────────────────────────────────

/// Preparation status of an order. Wire values are the API's Spanish keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en-preparacion")]
    InPreparation,
    #[serde(rename = "listo")]
    Ready,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InPreparation,
        OrderStatus::Ready,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::InPreparation => "en-preparacion",
            OrderStatus::Ready => "listo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InPreparation => "In preparation",
            OrderStatus::Ready => "Ready",
        }
    }

    /// The only status an operator may move this one to. Ready is terminal.
    pub fn next(&self) -> Option<Self> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::InPreparation => "status-preparing",
            OrderStatus::Ready => "status-ready",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Timestamps ──────────────────────────────────────────────────────

/// Creation time as serialized by the backend: either a document-store
/// timestamp object or an RFC 3339 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(alias = "_nanoseconds", default)]
        nanoseconds: u32,
    },
    Text(String),
}

impl CreatedAt {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CreatedAt::Timestamp {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds),
            CreatedAt::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
        }
    }

    /// "2026-01-20 21:35" when parseable, otherwise the raw text.
    pub fn display(&self) -> String {
        match (self.to_datetime(), self) {
            (Some(dt), _) => dt.format("%Y-%m-%d %H:%M").to_string(),
            (None, CreatedAt::Text(raw)) => raw.clone(),
            (None, CreatedAt::Timestamp { seconds, .. }) => seconds.to_string(),
        }
    }
}

// ── Orders ──────────────────────────────────────────────────────────

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub price: Price,
}

impl OrderItem {
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.product_id)
    }
}

/// An order as returned by the API. The admin history enriches it with the
/// customer's name and email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<CreatedAt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
}

impl Order {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn total_display(&self) -> String {
        format_amount(self.total.as_ref().and_then(Price::value))
    }

    pub fn created_display(&self) -> String {
        self.created_at
            .as_ref()
            .map(CreatedAt::display)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

// ── Requests ────────────────────────────────────────────────────────

/// A cart line as posted to `/create-order`. `price` is `null` when the menu
/// price was not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub new_status: OrderStatus,
}

/// Reply to a status update. Newer backends echo the updated order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub order: Option<Order>,
}
