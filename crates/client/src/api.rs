use shared_types::{
    AppError, ChatReply, ChatRequest, ClientRecord, CreateOrderRequest, CreateWorkerRequest,
    DeleteWorkerRequest, KitchenBoard, MenuItem, MessageResponse, Order, RegisterClientRequest,
    UpdateOrderStatusRequest, UpdateOrderStatusResponse, UpdateWorkerRequest, Worker,
};
use validator::Validate;

use crate::gateway::ApiClient;
use crate::identity::IdentityProvider;

/// Typed wrappers over the restaurant REST endpoints.
#[derive(Clone)]
pub struct RestaurantApi<I> {
    client: ApiClient<I>,
}

impl<I: IdentityProvider> RestaurantApi<I> {
    pub fn new(client: ApiClient<I>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<I> {
        &self.client
    }

    // ── Menu & orders ───────────────────────────────────────────────

    pub async fn menu(&self) -> Result<Vec<MenuItem>, AppError> {
        self.client.get("/menu").await
    }

    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<MessageResponse, AppError> {
        self.client.post("/create-order", req).await
    }

    pub async fn user_orders(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        let path = format!("/user-orders/{}", urlencoding::encode(user_id));
        self.client.get(&path).await
    }

    // ── Kitchen ─────────────────────────────────────────────────────

    pub async fn kitchen_orders(&self) -> Result<KitchenBoard, AppError> {
        let board: KitchenBoard = self.client.get("/kitchen-orders").await?;
        Ok(board.normalized())
    }

    pub async fn update_order_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<UpdateOrderStatusResponse, AppError> {
        self.client.post("/update-order-status", req).await
    }

    // ── Admin ───────────────────────────────────────────────────────

    pub async fn workers(&self) -> Result<Vec<Worker>, AppError> {
        self.client.get("/workers").await
    }

    pub async fn register_worker(
        &self,
        req: &CreateWorkerRequest,
    ) -> Result<MessageResponse, AppError> {
        self.client.post("/register-worker", req).await
    }

    pub async fn update_worker(&self, req: &UpdateWorkerRequest) -> Result<MessageResponse, AppError> {
        self.client.post("/update-worker", req).await
    }

    pub async fn delete_worker(&self, worker_id: &str) -> Result<MessageResponse, AppError> {
        let req = DeleteWorkerRequest {
            worker_id: worker_id.to_string(),
        };
        self.client.post("/delete-worker", &req).await
    }

    pub async fn clients(&self) -> Result<Vec<ClientRecord>, AppError> {
        self.client.get("/clients").await
    }

    pub async fn order_history(&self) -> Result<Vec<Order>, AppError> {
        self.client.get("/order-history").await
    }

    // ── Anonymous ───────────────────────────────────────────────────

    /// Self-registration for customers. The form is validated before anything
    /// is sent.
    pub async fn register_client(
        &self,
        req: &RegisterClientRequest,
    ) -> Result<MessageResponse, AppError> {
        req.validate()?;
        self.client.post_anonymous("/register-client", req).await
    }

    pub async fn chatbot(&self, req: &ChatRequest) -> Result<ChatReply, AppError> {
        self.client.post_anonymous("/chatbot", req).await
    }
}
