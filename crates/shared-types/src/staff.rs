use serde::{Deserialize, Serialize};
use validator::Validate;

/// Roles an admin can assign to staff accounts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    #[default]
    Waiter,
    Kitchen,
}

impl WorkerRole {
    pub const ALL: [WorkerRole; 2] = [WorkerRole::Waiter, WorkerRole::Kitchen];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerRole::Waiter => "waiter",
            WorkerRole::Kitchen => "kitchen",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkerRole::Waiter => "Waiter",
            WorkerRole::Kitchen => "Kitchen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub email: String,
    pub role: WorkerRole,
}

/// State of the admin's worker form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct WorkerForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    pub password: String,
    pub role: WorkerRole,
}

impl WorkerForm {
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            email: worker.email.clone(),
            password: String::new(),
            role: worker.role,
        }
    }

    /// Empty password means "keep the current one".
    pub fn password_opt(&self) -> Option<String> {
        (!self.password.is_empty()).then(|| self.password.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWorkerRequest {
    pub email: String,
    pub password: String,
    pub role: WorkerRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerRequest {
    pub worker_id: String,
    pub email: String,
    pub password: Option<String>,
    pub role: WorkerRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWorkerRequest {
    pub worker_id: String,
}

/// A registered customer as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}
