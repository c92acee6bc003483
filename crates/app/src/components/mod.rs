mod chat_widget;
mod footer;
mod menu_card;
mod order_card;
mod ordering_panel;

pub use chat_widget::ChatWidget;
pub use footer::Footer;
pub use menu_card::MenuCard;
pub use order_card::OrderCard;
pub use ordering_panel::OrderingPanel;
