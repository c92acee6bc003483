use shared_types::{MenuItem, Notice};

use crate::api::RestaurantApi;
use crate::identity::IdentityProvider;

/// Public menu page state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuBoard {
    pub items: Vec<MenuItem>,
}

impl MenuBoard {
    /// A failed fetch leaves an empty menu behind.
    pub async fn load<I: IdentityProvider>(&mut self, api: &RestaurantApi<I>) -> Result<(), Notice> {
        match api.menu().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load menu");
                self.items.clear();
                Err(Notice::failure("Could not load the menu", &e))
            }
        }
    }
}
