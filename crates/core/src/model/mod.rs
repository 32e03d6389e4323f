mod page;
mod page_views;

pub use page::{PageId, ParsePageError};
pub use page_views::{PageCounts, SessionViewState};
