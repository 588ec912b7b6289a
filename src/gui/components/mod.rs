//! Dioxus UI components for the analytics chat window.

pub mod charts;
pub mod chat_window;
pub mod input_bar;
pub mod message_list;

pub use charts::ChartBlock;
pub use chat_window::ChatWindow;
pub use input_bar::InputBar;
pub use message_list::MessageList;
