use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use client::{Api, Session};
use serde_json::{json, Value};
use shared_types::{ApiConfig, AppConfig, AuthUser, IdentityConfig, LoginRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    email: String,
    password: String,
    role: Option<String>,
}

#[derive(Default)]
struct MockState {
    accounts: Vec<Account>,
    refresh_tokens: HashMap<String, String>,
    id_tokens: HashMap<String, String>,
    menu: Vec<Value>,
    orders: Vec<Value>,
    workers: Vec<Value>,
    clients: Vec<Value>,
    requests: Vec<RecordedRequest>,
    failing: Vec<String>,
    echo_updated_order: bool,
    counter: u64,
}

impl MockState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}-{}", self.counter)
    }
}

/// In-process stand-in for the identity service, the profile store and the
/// restaurant REST API.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    /// Register an account. `role: None` leaves the user without a profile.
    pub async fn add_account(&self, email: &str, password: &str, role: Option<&str>) -> String {
        let mut state = self.state.lock().await;
        let uid = state.next_id("uid");
        state.accounts.push(Account {
            uid: uid.clone(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.map(str::to_string),
        });
        uid
    }

    pub async fn set_menu(&self, menu: Vec<Value>) {
        self.state.lock().await.menu = menu;
    }

    pub async fn add_order(&self, order: Value) {
        self.state.lock().await.orders.push(order);
    }

    pub async fn add_worker(&self, id: &str, email: &str, role: &str) {
        self.state
            .lock()
            .await
            .workers
            .push(json!({"id": id, "email": email, "role": role}));
    }

    /// Make every request to `path` answer 500.
    pub async fn fail(&self, path: &str) {
        self.state.lock().await.failing.push(path.to_string());
    }

    /// Have `/update-order-status` return the updated order object.
    pub async fn echo_updated_order(&self) {
        self.state.lock().await.echo_updated_order = true;
    }

    /// Revoke every refresh token so credential issuance fails.
    pub async fn revoke_refresh_tokens(&self) {
        self.state.lock().await.refresh_tokens.clear();
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Requests made to the restaurant API at `path` (e.g. `/menu`).
    pub async fn api_requests(&self, path: &str) -> Vec<RecordedRequest> {
        let full = format!("/api{path}");
        self.requests()
            .await
            .into_iter()
            .filter(|r| r.path == full)
            .collect()
    }

    pub async fn workers(&self) -> Vec<Value> {
        self.state.lock().await.workers.clone()
    }

    pub async fn order_status(&self, order_id: &str) -> Option<String> {
        self.state
            .lock()
            .await
            .orders
            .iter()
            .find(|o| o["id"] == order_id)
            .and_then(|o| o["status"].as_str().map(str::to_string))
    }

    pub async fn account_role(&self, email: &str) -> Option<String> {
        self.state
            .lock()
            .await
            .accounts
            .iter()
            .find(|a| a.email == email)
            .and_then(|a| a.role.clone())
    }
}

// ── Router ──────────────────────────────────────────────────────────

fn router(backend: MockBackend) -> Router {
    let public_api = Router::new()
        .route("/menu", get(menu))
        .route("/register-client", post(register_client))
        .route("/chatbot", post(chatbot));

    let protected_api = Router::new()
        .route("/create-order", post(create_order))
        .route("/user-orders/{user_id}", get(user_orders))
        .route("/kitchen-orders", get(kitchen_orders))
        .route("/update-order-status", post(update_order_status))
        .route("/workers", get(list_workers))
        .route("/register-worker", post(register_worker))
        .route("/update-worker", post(update_worker))
        .route("/delete-worker", post(delete_worker))
        .route("/clients", get(list_clients))
        .route("/order-history", get(order_history))
        .route_layer(middleware::from_fn_with_state(backend.clone(), require_bearer));

    Router::new()
        .route("/identity/accounts:signInWithPassword", post(sign_in))
        .route("/securetoken/token", post(refresh_token))
        .route("/profiles/users/{uid}", get(profile))
        .nest("/api", public_api.merge(protected_api))
        .layer(middleware::from_fn_with_state(backend.clone(), record))
        .with_state(backend)
}

async fn record(State(backend): State<MockBackend>, req: Request<Body>, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        authorization: parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    };
    let failing = {
        let mut state = backend.state.lock().await;
        state.requests.push(recorded.clone());
        state
            .failing
            .iter()
            .any(|p| recorded.path.ends_with(p.as_str()))
    };
    if failing {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn require_bearer(
    State(backend): State<MockBackend>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match bearer_uid(&backend, req.headers()).await {
        Some(_) => next.run(req).await,
        None => error(StatusCode::UNAUTHORIZED, "Unauthorized"),
    }
}

async fn bearer_uid(backend: &MockBackend, headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .to_string();
    backend.state.lock().await.id_tokens.get(&token).cloned()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

// ── Identity service ────────────────────────────────────────────────

async fn sign_in(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let mut state = backend.state.lock().await;

    let identity_error = |code: &str| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 400, "message": code}})),
        )
            .into_response()
    };
    let Some(account) = state.accounts.iter().find(|a| a.email == email).cloned() else {
        return identity_error("EMAIL_NOT_FOUND");
    };
    if account.password != password {
        return identity_error("INVALID_PASSWORD");
    }

    let id_token = state.next_id("id");
    let refresh = state.next_id("refresh");
    state.id_tokens.insert(id_token.clone(), account.uid.clone());
    state.refresh_tokens.insert(refresh.clone(), account.uid.clone());
    Json(json!({
        "localId": account.uid,
        "email": account.email,
        "idToken": id_token,
        "refreshToken": refresh,
        "expiresIn": "3600",
    }))
    .into_response()
}

async fn refresh_token(
    State(backend): State<MockBackend>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let mut state = backend.state.lock().await;
    let presented = form.get("refresh_token").cloned().unwrap_or_default();
    let Some(uid) = state.refresh_tokens.get(&presented).cloned() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"message": "INVALID_REFRESH_TOKEN"}})),
        )
            .into_response();
    };
    let id_token = state.next_id("id");
    state.id_tokens.insert(id_token.clone(), uid.clone());
    Json(json!({
        "id_token": id_token,
        "refresh_token": presented,
        "user_id": uid,
        "expires_in": "3600",
    }))
    .into_response()
}

async fn profile(
    State(backend): State<MockBackend>,
    Path(uid): Path<String>,
    headers: HeaderMap,
) -> Response {
    if bearer_uid(&backend, &headers).await.is_none() {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let state = backend.state.lock().await;
    match state
        .accounts
        .iter()
        .find(|a| a.uid == uid)
        .and_then(|a| a.role.clone())
    {
        Some(role) => Json(json!({
            "name": format!("users/{uid}"),
            "fields": { "role": { "stringValue": role } }
        }))
        .into_response(),
        None => error(StatusCode::NOT_FOUND, "Document not found"),
    }
}

// ── Restaurant API ──────────────────────────────────────────────────

async fn menu(State(backend): State<MockBackend>) -> Json<Value> {
    Json(Value::Array(backend.state.lock().await.menu.clone()))
}

async fn create_order(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.state.lock().await;
    let id = state.next_id("order");
    let items = body["items"].as_array().cloned().unwrap_or_default();
    let total: f64 = items
        .iter()
        .map(|i| i["price"].as_f64().unwrap_or(0.0) * i["quantity"].as_f64().unwrap_or(0.0))
        .sum();
    state.orders.push(json!({
        "id": id,
        "userId": body["userId"],
        "items": items,
        "status": "pendiente",
        "total": total,
        "createdAt": {"_seconds": 1_700_000_000, "_nanoseconds": 0},
    }));
    (
        StatusCode::CREATED,
        Json(json!({"message": "Order created successfully", "orderId": id})),
    )
        .into_response()
}

async fn user_orders(State(backend): State<MockBackend>, Path(user_id): Path<String>) -> Json<Value> {
    let state = backend.state.lock().await;
    let orders: Vec<Value> = state
        .orders
        .iter()
        .filter(|o| o["userId"] == user_id.as_str())
        .cloned()
        .collect();
    Json(Value::Array(orders))
}

async fn kitchen_orders(State(backend): State<MockBackend>) -> Json<Value> {
    let state = backend.state.lock().await;
    let bucket = |status: &str| -> Vec<Value> {
        state
            .orders
            .iter()
            .filter(|o| o["status"] == status)
            .cloned()
            .collect()
    };
    Json(json!({
        "pendiente": bucket("pendiente"),
        "en-preparacion": bucket("en-preparacion"),
        "listo": bucket("listo"),
    }))
}

async fn update_order_status(
    State(backend): State<MockBackend>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = backend.state.lock().await;
    let echo = state.echo_updated_order;
    let Some(order) = state.orders.iter_mut().find(|o| o["id"] == body["orderId"]) else {
        return error(StatusCode::NOT_FOUND, "Order not found");
    };
    order["status"] = body["newStatus"].clone();
    if echo {
        order["clientName"] = json!("Confirmed by server");
        Json(json!({"message": "Order status updated", "order": order.clone()})).into_response()
    } else {
        Json(json!({"message": "Order status updated"})).into_response()
    }
}

async fn list_workers(State(backend): State<MockBackend>) -> Json<Value> {
    Json(Value::Array(backend.state.lock().await.workers.clone()))
}

async fn register_worker(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.state.lock().await;
    if state.workers.iter().any(|w| w["email"] == body["email"]) {
        return error(StatusCode::CONFLICT, "Email already in use");
    }
    let id = state.next_id("worker");
    state
        .workers
        .push(json!({"id": id, "email": body["email"], "role": body["role"]}));
    (
        StatusCode::CREATED,
        Json(json!({"message": "Worker registered successfully"})),
    )
        .into_response()
}

async fn update_worker(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.state.lock().await;
    let Some(worker) = state.workers.iter_mut().find(|w| w["id"] == body["workerId"]) else {
        return error(StatusCode::NOT_FOUND, "Worker not found");
    };
    worker["email"] = body["email"].clone();
    worker["role"] = body["role"].clone();
    Json(json!({"message": "Worker updated successfully"})).into_response()
}

async fn delete_worker(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.state.lock().await;
    let before = state.workers.len();
    state.workers.retain(|w| w["id"] != body["workerId"]);
    if state.workers.len() == before {
        return error(StatusCode::NOT_FOUND, "Worker not found");
    }
    Json(json!({"message": "Worker deleted successfully"})).into_response()
}

async fn list_clients(State(backend): State<MockBackend>) -> Json<Value> {
    Json(Value::Array(backend.state.lock().await.clients.clone()))
}

async fn order_history(State(backend): State<MockBackend>) -> Json<Value> {
    let state = backend.state.lock().await;
    let history: Vec<Value> = state
        .orders
        .iter()
        .map(|o| {
            let mut enriched = o.clone();
            let owner = state
                .clients
                .iter()
                .find(|c| c["id"] == o["userId"]);
            enriched["clientName"] = owner.map(|c| c["fullName"].clone()).unwrap_or(json!("Unknown"));
            enriched["clientEmail"] = owner.map(|c| c["email"].clone()).unwrap_or(json!("Unknown"));
            enriched
        })
        .collect();
    Json(Value::Array(history))
}

async fn register_client(State(backend): State<MockBackend>, Json(body): Json<Value>) -> Response {
    let mut state = backend.state.lock().await;
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if state.accounts.iter().any(|a| a.email == email) {
        return error(StatusCode::CONFLICT, "Email already registered");
    }
    let uid = state.next_id("uid");
    state.accounts.push(Account {
        uid: uid.clone(),
        email: email.clone(),
        password: body["password"].as_str().unwrap_or_default().to_string(),
        role: Some("client".to_string()),
    });
    state.clients.push(json!({
        "id": uid,
        "fullName": body["fullName"],
        "address": body["address"],
        "phone": body["phone"],
        "email": email,
    }));
    (
        StatusCode::CREATED,
        Json(json!({"message": "Client registered successfully"})),
    )
        .into_response()
}

async fn chatbot(Json(body): Json<Value>) -> Json<Value> {
    match body["message"].as_str() {
        Some("silence") => Json(json!({})),
        Some(message) => Json(json!({ "response": format!("You said: {message}") })),
        None => Json(json!({})),
    }
}

// ── Harness ─────────────────────────────────────────────────────────

/// Serve the mock on an ephemeral port and return its root URL.
pub async fn spawn_backend(backend: MockBackend) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Mock backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, router(backend))
            .await
            .expect("Mock backend crashed");
    });
    format!("http://{addr}")
}

pub fn config_for(root: &str) -> AppConfig {
    AppConfig {
        api: ApiConfig {
            base_url: format!("{root}/api"),
            ..ApiConfig::default()
        },
        identity: IdentityConfig {
            api_key: "test-key".to_string(),
            auth_url: format!("{root}/identity"),
            token_url: format!("{root}/securetoken"),
            profile_url: format!("{root}/profiles"),
            session_file: String::new(),
        },
        ..AppConfig::default()
    }
}

pub struct TestEnv {
    pub backend: MockBackend,
    pub api: Api,
    pub session: Session,
}

/// Fresh backend, nobody signed in.
pub async fn test_env() -> TestEnv {
    let backend = MockBackend::default();
    let root = spawn_backend(backend.clone()).await;
    let (api, session) = client::connect(&config_for(&root));
    TestEnv {
        backend,
        api,
        session,
    }
}

/// Fresh backend with a signed-in user holding `role`.
pub async fn signed_in_env(role: &str) -> (TestEnv, AuthUser) {
    let env = test_env().await;
    let email = format!("{role}@example.com");
    env.backend.add_account(&email, "secret1", Some(role)).await;
    let user = env
        .session
        .sign_in(&LoginRequest {
            email,
            password: "secret1".to_string(),
        })
        .await
        .expect("Sign-in should succeed");
    (env, user)
}

pub fn menu_item(id: &str, name: &str, price: Value) -> Value {
    json!({
        "id": id,
        "nombre": name,
        "descripcion": format!("{name} de la casa"),
        "precio": price,
        "imagen": format!("{id}.jpg"),
    })
}

pub fn order_json(id: &str, user_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "status": status,
        "items": [{"productId": "p1", "productName": "Taco", "quantity": 1, "price": 3.0}],
        "total": 3.0,
        "createdAt": "2026-01-20T21:35:00Z",
    })
}
