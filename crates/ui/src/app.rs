use dioxus::prelude::*;
use dioxus_router::Router;
use portfolio_core::{BrowsingSession, PageId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session_provider;

#[component]
pub fn App() -> Element {
    let profile = use_context::<AppContext>().profile();
    let title = profile.site_title();

    // One session per window; the initial Home render counts as its first visit.
    use_session_provider(|| BrowsingSession::start(PageId::Home));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
