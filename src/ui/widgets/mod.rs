//! TUI widgets.

mod help;
mod notifications;
mod order_detail;
mod order_list;
mod status_bar;

pub use help::HelpPanel;
pub use notifications::render_notification;
pub use order_detail::OrderDetail;
pub use order_list::OrderList;
pub use status_bar::{KeyHints, StatusBar};
