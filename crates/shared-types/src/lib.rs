pub mod config;
pub mod error;
pub mod models;

// Restaurant domain
pub mod access;
pub mod cart;
pub mod chat;
pub mod kitchen;
pub mod menu;
pub mod notice;
pub mod order;
pub mod staff;

pub use config::*;
pub use error::*;
pub use models::*;

pub use access::*;
pub use cart::*;
pub use chat::*;
pub use kitchen::*;
pub use menu::*;
pub use notice::*;
pub use order::*;
pub use staff::*;
