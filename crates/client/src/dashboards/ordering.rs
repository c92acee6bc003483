use shared_types::{
    AppError, AuthUser, Cart, CreateOrderRequest, MenuItem, MessageResponse, Notice, Order,
    Severity,
};

use crate::api::RestaurantApi;
use crate::identity::IdentityProvider;

/// Waiter and client dashboards: menu, cart and the user's orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDesk {
    pub menu: Vec<MenuItem>,
    pub cart: Cart,
    pub orders: Vec<Order>,
}

impl OrderDesk {
    pub async fn load_menu<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
    ) -> Result<(), Notice> {
        match api.menu().await {
            Ok(menu) => {
                self.menu = menu;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load menu");
                self.menu.clear();
                Err(Notice::failure("Could not load the menu", &e))
            }
        }
    }

    pub async fn fetch_orders<I: IdentityProvider>(
        api: &RestaurantApi<I>,
        user: &AuthUser,
    ) -> Result<Vec<Order>, Notice> {
        api.user_orders(&user.uid).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load orders");
            Notice::failure("Could not load your orders", &e)
        })
    }

    pub async fn refresh_orders<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        user: &AuthUser,
    ) -> Result<(), Notice> {
        self.orders = Self::fetch_orders(api, user).await?;
        Ok(())
    }

    pub fn add(&mut self, item: &MenuItem) {
        self.cart.add(item);
    }

    pub fn remove(&mut self, item_id: &str) {
        self.cart.remove(item_id);
    }

    /// The order the current cart would place. Empty carts are rejected
    /// here, before any request.
    pub fn prepare_order(&self, user: &AuthUser) -> Result<CreateOrderRequest, Notice> {
        self.cart
            .to_order(&user.uid)
            .map_err(|_| Notice::warning("Your cart is empty"))
    }

    /// Apply the answer to a placed order. Success takes exactly the ordered
    /// units out of the cart; failure leaves the cart alone.
    pub fn settle_order(
        &mut self,
        req: &CreateOrderRequest,
        outcome: Result<MessageResponse, AppError>,
    ) -> Notice {
        match outcome {
            Ok(response) => {
                self.cart.take_submitted(&req.items);
                let message = if response.message.is_empty() {
                    "Order placed".to_string()
                } else {
                    response.message
                };
                Notice::success(message)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to place order");
                Notice::failure("Could not place the order", &e)
            }
        }
    }

    /// Place the cart as an order and re-fetch the user's orders on success.
    #[tracing::instrument(skip(self, api, user), fields(uid = %user.uid))]
    pub async fn submit<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        user: &AuthUser,
    ) -> Notice {
        let req = match self.prepare_order(user) {
            Ok(req) => req,
            Err(notice) => return notice,
        };
        let outcome = api.create_order(&req).await;
        let notice = self.settle_order(&req, outcome);
        if notice.severity == Severity::Success {
            if let Err(stale) = self.refresh_orders(api, user).await {
                tracing::warn!(message = %stale.message, "Order list is stale");
            }
        }
        notice
    }
}
