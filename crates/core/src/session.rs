use std::fmt;

use uuid::Uuid;

use crate::model::{PageId, SessionViewState};

/// Identifier of one browsing session, used to correlate log lines.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of a selection in the navigation control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The active page changed and the visit was counted.
    Visited { from: PageId, to: PageId },
    /// The selection matched the active page; nothing was recorded.
    Unchanged,
}

impl NavigationOutcome {
    #[must_use]
    pub const fn is_visit(self) -> bool {
        matches!(self, NavigationOutcome::Visited { .. })
    }
}

/// State owned by one interactive session: the active page and its view counts.
///
/// A session starts on a page whose initial render counts as a visit. It is
/// discarded with the window that owns it; nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowsingSession {
    id: SessionId,
    active: PageId,
    views: SessionViewState,
}

impl BrowsingSession {
    #[must_use]
    pub fn start(page: PageId) -> Self {
        Self::with_id(SessionId::new(), page)
    }

    #[must_use]
    pub fn with_id(id: SessionId, page: PageId) -> Self {
        let mut views = SessionViewState::new();
        views.record_visit(page);
        Self {
            id,
            active: page,
            views,
        }
    }

    /// Handle a selection of `page`.
    ///
    /// Selecting the already active page is not a navigation event.
    pub fn navigate(&mut self, page: PageId) -> NavigationOutcome {
        if page == self.active {
            return NavigationOutcome::Unchanged;
        }
        let from = self.active;
        self.views.record_visit(page);
        self.active = page;
        NavigationOutcome::Visited { from, to: page }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn active(&self) -> PageId {
        self.active
    }

    #[must_use]
    pub fn views(&self) -> &SessionViewState {
        &self.views
    }
}
