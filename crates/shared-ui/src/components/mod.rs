// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod empty_state;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod tab_bar;

// Primitive wrappers
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use empty_state::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use tab_bar::*;
pub use toast::*;
