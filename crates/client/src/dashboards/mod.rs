pub mod admin;
pub mod chat;
pub mod kitchen;
pub mod menu;
pub mod ordering;

pub use admin::{AdminDesk, AdminTab, TabData, WorkerChange};
pub use chat::ChatSession;
pub use kitchen::KitchenDesk;
pub use menu::MenuBoard;
pub use ordering::OrderDesk;
