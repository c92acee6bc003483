pub mod admin;
pub mod client;
pub mod kitchen;
pub mod waiter;

pub use admin::AdminDashboard;
pub use client::ClientDashboard;
pub use kitchen::KitchenDashboard;
pub use waiter::WaiterDashboard;
