use portfolio_core::{PageId, SessionViewState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCountRowVm {
    pub page: PageId,
    pub line: String,
}

/// Pre-formatted lines for the sidebar analytics panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsPanelVm {
    pub total_line: String,
    pub rows: Vec<PageCountRowVm>,
}

impl AnalyticsPanelVm {
    #[must_use]
    pub fn from_views(views: &SessionViewState) -> Self {
        Self {
            total_line: format!("Total page views: {}", views.total()),
            rows: views
                .counts()
                .map(|(page, count)| PageCountRowVm {
                    page,
                    line: format!("{page}: {count}"),
                })
                .collect(),
        }
    }
}

/// Caption shown under a page with its own visit count.
#[must_use]
pub fn page_views_caption(count: u32) -> String {
    let unit = if count == 1 { "time" } else { "times" };
    format!("👀 This page viewed {count} {unit} this session.")
}
