use shared_types::{
    AppError, KitchenBoard, Notice, UpdateOrderStatusRequest, UpdateOrderStatusResponse,
};

use crate::api::RestaurantApi;
use crate::identity::IdentityProvider;

/// Kitchen view state: the three status buckets.
///
/// A status change runs in three steps so a UI can hold the board only
/// while planning and settling: [`plan_advance`](Self::plan_advance) reads
/// the board, the request goes out, and [`settle_advance`](Self::settle_advance)
/// applies the outcome to whatever the board looks like by then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenDesk {
    pub board: KitchenBoard,
}

impl KitchenDesk {
    pub async fn load<I: IdentityProvider>(&mut self, api: &RestaurantApi<I>) -> Result<(), Notice> {
        self.board = Self::fetch(api).await?;
        Ok(())
    }

    pub async fn fetch<I: IdentityProvider>(api: &RestaurantApi<I>) -> Result<KitchenBoard, Notice> {
        api.kitchen_orders().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load kitchen orders");
            Notice::failure("Could not load kitchen orders", &e)
        })
    }

    /// The status update an advance of `order_id` would send.
    pub fn plan_advance(&self, order_id: &str) -> Result<UpdateOrderStatusRequest, Notice> {
        let target = self
            .board
            .plan_advance(order_id)
            .map_err(|e| Notice::warning(e.message))?;
        Ok(UpdateOrderStatusRequest {
            order_id: order_id.to_string(),
            new_status: target,
        })
    }

    /// Apply the server's answer to a planned advance. The board changes only
    /// when the server accepted the new status.
    pub fn settle_advance(
        &mut self,
        req: &UpdateOrderStatusRequest,
        outcome: Result<UpdateOrderStatusResponse, AppError>,
    ) -> Notice {
        let order_id = req.order_id.as_str();
        let target = req.new_status;
        match outcome {
            Ok(response) => {
                self.board.apply_transition(order_id, target, response.order);
                tracing::info!(order_id, status = target.as_str(), "Order advanced");
                Notice::success(format!("Order moved to {}", target.label()))
            }
            Err(e) => {
                tracing::error!(order_id, error = %e, "Failed to update order status");
                Notice::failure("Could not update the order status", &e)
            }
        }
    }

    /// Move an order one step along the pipeline.
    #[tracing::instrument(skip(self, api))]
    pub async fn advance<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        order_id: &str,
    ) -> Notice {
        let req = match self.plan_advance(order_id) {
            Ok(req) => req,
            Err(notice) => return notice,
        };
        let outcome = api.update_order_status(&req).await;
        self.settle_advance(&req, outcome)
    }
}
