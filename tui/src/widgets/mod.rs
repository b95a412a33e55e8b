//! Custom widgets

mod page_view;

pub use page_view::{PageView, PageViewState};
