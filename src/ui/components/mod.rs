mod alert_dialog;
mod input_bar;
mod message_list;

pub use alert_dialog::AlertDialog;
pub use input_bar::InputBar;
pub use message_list::{message_label, MessageList};
