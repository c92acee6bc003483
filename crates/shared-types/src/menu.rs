use serde::{Deserialize, Deserializer, Serialize};

/// Image shown when a menu item has none.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// A price as the remote API sends it: sometimes a JSON number, sometimes a
/// numeric string, sometimes `null`. Unparseable values render as `N/A`.
///
/// Deserialization never fails, so one bad price cannot sink a whole menu or
/// order list. `Missing` serializes back to `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::Number(n) => n.as_f64().map_or(Price::Missing, Price::Number),
            serde_json::Value::String(s) => Price::Text(s),
            _ => Price::Missing,
        })
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Number(value)
    }
}

impl Price {
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            Price::Number(n) => *n,
            Price::Text(s) => s.trim().parse::<f64>().ok()?,
            Price::Missing => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Two-decimal rendering, or `N/A` when the value is not numeric.
    pub fn display(&self) -> String {
        format_amount(self.value())
    }
}

/// Render an optional amount with two decimals, `N/A` when absent.
pub fn format_amount(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "N/A".to_string())
}

/// A dish on the menu. Field names on the wire are Spanish; English aliases
/// are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: Option<String>,
    #[serde(rename = "precio", alias = "price", default)]
    pub price: Price,
    #[serde(rename = "imagen", alias = "image", default)]
    pub image: Option<String>,
}

impl MenuItem {
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or("Unnamed item")
    }

    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or("No description available.")
    }

    pub fn image_src(&self) -> String {
        format!(
            "/images/{}",
            non_empty(self.image.as_deref()).unwrap_or(DEFAULT_IMAGE)
        )
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
