//! UI Components
//!
//! One component per page feature; shared state comes from the page store.

pub mod quote_display;
pub mod comment_panel;
pub mod login_widget;
pub mod map_widget;

pub use quote_display::QuoteDisplay;
pub use comment_panel::CommentPanel;
pub use login_widget::LoginWidget;
pub use map_widget::MapWidget;
