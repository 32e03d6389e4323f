mod analytics_vm;
mod markdown_vm;

pub use analytics_vm::{AnalyticsPanelVm, PageCountRowVm, page_views_caption};
pub use markdown_vm::{markdown_to_html, sanitize_html};
