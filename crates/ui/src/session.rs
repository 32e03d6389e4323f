use dioxus::prelude::*;
use dioxus_router::use_navigator;
use portfolio_core::{BrowsingSession, NavigationOutcome, PageId};

use crate::routes::Route;

/// Provide the session state for this `VirtualDom`.
///
/// Each window gets its own `BrowsingSession`; `start` runs once, on first render.
pub fn use_session_provider(start: impl FnOnce() -> BrowsingSession) -> Signal<BrowsingSession> {
    use_context_provider(|| {
        let session = start();
        tracing::info!(
            session_id = %session.id(),
            page = %session.active(),
            "session started"
        );
        Signal::new(session)
    })
}

#[must_use]
pub fn use_browsing_session() -> Signal<BrowsingSession> {
    use_context::<Signal<BrowsingSession>>()
}

/// Apply a selection from the navigation control to the session.
pub fn select_page(session: &mut Signal<BrowsingSession>, page: PageId) -> NavigationOutcome {
    let mut state = session.write();
    let outcome = state.navigate(page);
    match outcome {
        NavigationOutcome::Visited { from, to } => {
            tracing::debug!(
                session_id = %state.id(),
                %from,
                %to,
                count = state.views().count(to),
                total = state.views().total(),
                "page visited"
            );
        }
        NavigationOutcome::Unchanged => {
            tracing::trace!(session_id = %state.id(), %page, "selection unchanged");
        }
    }
    outcome
}

/// Handler for the navigation control: count the visit, then route to the page.
///
/// Re-selecting the active page neither counts nor navigates.
pub fn use_page_selector() -> Callback<PageId> {
    let mut session = use_browsing_session();
    let navigator = use_navigator();
    use_callback(move |page: PageId| {
        if select_page(&mut session, page).is_visit() {
            let _ = navigator.push(Route::from(page));
        }
    })
}
