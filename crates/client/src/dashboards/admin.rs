use shared_types::{
    AppError, ClientRecord, CreateWorkerRequest, MessageResponse, Notice, Order,
    UpdateWorkerRequest, Worker, WorkerForm,
};
use validator::Validate;

use crate::api::RestaurantApi;
use crate::identity::IdentityProvider;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Workers,
    Clients,
    Orders,
}

impl AdminTab {
    pub const ALL: [AdminTab; 3] = [AdminTab::Workers, AdminTab::Clients, AdminTab::Orders];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Workers => "Workers",
            AdminTab::Clients => "Clients",
            AdminTab::Orders => "Order history",
        }
    }
}

/// Dataset behind one admin tab.
#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Workers(Vec<Worker>),
    Clients(Vec<ClientRecord>),
    History(Vec<Order>),
}

/// A worker create or update built from the form.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerChange {
    Create(CreateWorkerRequest),
    Update(UpdateWorkerRequest),
}

impl WorkerChange {
    pub async fn send<I: IdentityProvider>(
        &self,
        api: &RestaurantApi<I>,
    ) -> Result<MessageResponse, AppError> {
        match self {
            WorkerChange::Create(req) => api.register_worker(req).await,
            WorkerChange::Update(req) => api.update_worker(req).await,
        }
    }

    fn done_message(&self) -> &'static str {
        match self {
            WorkerChange::Create(_) => "Worker created",
            WorkerChange::Update(_) => "Worker updated",
        }
    }

    /// Whether the form still shows what this change sent.
    fn targets_form(&self, editing: Option<&str>, form: &WorkerForm) -> bool {
        match self {
            WorkerChange::Create(req) => {
                editing.is_none() && form.email == req.email && form.role == req.role
            }
            WorkerChange::Update(req) => {
                editing == Some(req.worker_id.as_str())
                    && form.email == req.email
                    && form.role == req.role
            }
        }
    }
}

/// Admin view state: the active tab, its dataset and the worker form.
///
/// Worker mutations are split into a synchronous prepare step, the request,
/// and a synchronous settle step that runs against the current state, so
/// edits made while a request is in flight are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminDesk {
    pub tab: AdminTab,
    pub workers: Vec<Worker>,
    pub clients: Vec<ClientRecord>,
    pub history: Vec<Order>,
    pub form: WorkerForm,
    /// Id of the worker being edited; `None` means the form creates.
    pub editing: Option<String>,
}

impl AdminDesk {
    /// Switch tabs and fetch the tab's dataset.
    pub async fn activate<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        tab: AdminTab,
    ) -> Result<(), Notice> {
        self.tab = tab;
        let data = Self::fetch_tab(api, tab).await?;
        self.apply_tab(data);
        Ok(())
    }

    pub async fn fetch_tab<I: IdentityProvider>(
        api: &RestaurantApi<I>,
        tab: AdminTab,
    ) -> Result<TabData, Notice> {
        match tab {
            AdminTab::Workers => Self::fetch_workers(api).await.map(TabData::Workers),
            AdminTab::Clients => api.clients().await.map(TabData::Clients).map_err(|e| {
                tracing::error!(error = %e, "Failed to load clients");
                Notice::failure("Could not load clients", &e)
            }),
            AdminTab::Orders => api.order_history().await.map(TabData::History).map_err(|e| {
                tracing::error!(error = %e, "Failed to load order history");
                Notice::failure("Could not load the order history", &e)
            }),
        }
    }

    /// Store one tab's dataset, leaving the others as they are.
    pub fn apply_tab(&mut self, data: TabData) {
        match data {
            TabData::Workers(workers) => self.workers = workers,
            TabData::Clients(clients) => self.clients = clients,
            TabData::History(history) => self.history = history,
        }
    }

    pub async fn fetch_workers<I: IdentityProvider>(
        api: &RestaurantApi<I>,
    ) -> Result<Vec<Worker>, Notice> {
        api.workers().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load workers");
            Notice::failure("Could not load workers", &e)
        })
    }

    pub async fn refresh_workers<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
    ) -> Result<(), Notice> {
        self.workers = Self::fetch_workers(api).await?;
        Ok(())
    }

    pub fn edit(&mut self, worker: &Worker) {
        self.form = WorkerForm::from_worker(worker);
        self.editing = Some(worker.id.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.form = WorkerForm::default();
        self.editing = None;
    }

    /// Validate the form and turn it into a create or an update.
    pub fn prepare_worker(&self) -> Result<WorkerChange, Notice> {
        if let Err(e) = self.form.validate() {
            return Err(Notice::warning(AppError::from(e).friendly_message()));
        }
        match &self.editing {
            Some(worker_id) => Ok(WorkerChange::Update(UpdateWorkerRequest {
                worker_id: worker_id.clone(),
                email: self.form.email.clone(),
                password: self.form.password_opt(),
                role: self.form.role,
            })),
            None if self.form.password.is_empty() => {
                Err(Notice::warning("A password is required for new workers"))
            }
            None => Ok(WorkerChange::Create(CreateWorkerRequest {
                email: self.form.email.clone(),
                password: self.form.password.clone(),
                role: self.form.role,
            })),
        }
    }

    /// Apply the answer to a worker change. The form is reset only if it
    /// still describes the change that was sent.
    pub fn settle_worker(
        &mut self,
        change: &WorkerChange,
        outcome: Result<MessageResponse, AppError>,
    ) -> Notice {
        match outcome {
            Ok(_) => {
                if change.targets_form(self.editing.as_deref(), &self.form) {
                    self.cancel_edit();
                }
                Notice::success(change.done_message())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save worker");
                Notice::failure("Could not save the worker", &e)
            }
        }
    }

    /// Apply the answer to a delete. The worker leaves the list at once; a
    /// form editing it is reset.
    pub fn settle_delete(
        &mut self,
        worker_id: &str,
        outcome: Result<MessageResponse, AppError>,
    ) -> Notice {
        match outcome {
            Ok(_) => {
                self.workers.retain(|w| w.id != worker_id);
                if self.editing.as_deref() == Some(worker_id) {
                    self.cancel_edit();
                }
                Notice::success("Worker deleted")
            }
            Err(e) => {
                tracing::error!(worker_id, error = %e, "Failed to delete worker");
                Notice::failure("Could not delete the worker", &e)
            }
        }
    }

    /// Create or update a worker from the form, then re-fetch the list.
    #[tracing::instrument(skip(self, api))]
    pub async fn submit_worker<I: IdentityProvider>(&mut self, api: &RestaurantApi<I>) -> Notice {
        let change = match self.prepare_worker() {
            Ok(change) => change,
            Err(notice) => return notice,
        };
        let outcome = change.send(api).await;
        let saved = outcome.is_ok();
        let notice = self.settle_worker(&change, outcome);
        if saved {
            self.refresh_after_mutation(api).await;
        }
        notice
    }

    pub async fn delete_worker<I: IdentityProvider>(
        &mut self,
        api: &RestaurantApi<I>,
        worker_id: &str,
    ) -> Notice {
        let outcome = api.delete_worker(worker_id).await;
        let deleted = outcome.is_ok();
        let notice = self.settle_delete(worker_id, outcome);
        if deleted {
            self.refresh_after_mutation(api).await;
        }
        notice
    }

    async fn refresh_after_mutation<I: IdentityProvider>(&mut self, api: &RestaurantApi<I>) {
        if let Err(notice) = self.refresh_workers(api).await {
            tracing::warn!(message = %notice.message, "Worker list is stale");
        }
    }
}
