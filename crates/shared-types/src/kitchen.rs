use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::order::{Order, OrderStatus};

/// Orders grouped by preparation status, as returned by `/kitchen-orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KitchenBoard {
    #[serde(rename = "pendiente", default)]
    pub pending: Vec<Order>,
    #[serde(rename = "en-preparacion", default)]
    pub in_preparation: Vec<Order>,
    #[serde(rename = "listo", default)]
    pub ready: Vec<Order>,
}

impl KitchenBoard {
    /// Re-file every order under the bucket its own `status` names and drop
    /// duplicate ids, keeping the first occurrence.
    pub fn normalized(self) -> Self {
        let mut board = KitchenBoard::default();
        let all = self
            .pending
            .into_iter()
            .chain(self.in_preparation)
            .chain(self.ready);
        for order in all {
            if board.locate(&order.id).is_none() {
                let status = order.status;
                board.bucket_mut(status).push(order);
            }
        }
        board
    }

    pub fn bucket(&self, status: OrderStatus) -> &[Order] {
        match status {
            OrderStatus::Pending => &self.pending,
            OrderStatus::InPreparation => &self.in_preparation,
            OrderStatus::Ready => &self.ready,
        }
    }

    fn bucket_mut(&mut self, status: OrderStatus) -> &mut Vec<Order> {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::InPreparation => &mut self.in_preparation,
            OrderStatus::Ready => &mut self.ready,
        }
    }

    /// Find an order by id across all buckets.
    pub fn locate(&self, order_id: &str) -> Option<(OrderStatus, &Order)> {
        OrderStatus::ALL.into_iter().find_map(|status| {
            self.bucket(status)
                .iter()
                .find(|o| o.id == order_id)
                .map(|o| (status, o))
        })
    }

    /// Status the order should move to next. Ready orders and unknown ids are
    /// rejected without touching the board.
    pub fn plan_advance(&self, order_id: &str) -> Result<OrderStatus, AppError> {
        let (status, _) = self
            .locate(order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} is not on the board")))?;
        status
            .next()
            .ok_or_else(|| AppError::bad_request("Order is already ready"))
    }

    /// Move an order into `target` after the server accepted the change.
    ///
    /// The server's copy replaces the local one when its id matches; the
    /// order ends up in exactly one bucket either way.
    pub fn apply_transition(
        &mut self,
        order_id: &str,
        target: OrderStatus,
        confirmed: Option<Order>,
    ) -> bool {
        let mut local = None;
        for status in OrderStatus::ALL {
            let bucket = self.bucket_mut(status);
            while let Some(pos) = bucket.iter().position(|o| o.id == order_id) {
                let removed = bucket.remove(pos);
                if local.is_none() {
                    local = Some(removed);
                }
            }
        }

        let order = match confirmed.filter(|o| o.id == order_id) {
            Some(server) => server,
            None => match local {
                Some(order) => order,
                None => return false,
            },
        };
        self.bucket_mut(target).push(order.with_status(target));
        true
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.in_preparation.len() + self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
