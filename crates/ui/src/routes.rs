use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use portfolio_core::PageId;

use crate::context::AppContext;
use crate::session::{use_browsing_session, use_page_selector};
use crate::views::{ContactView, FinanceView, HomeView, ProjectsView, SkillsView};
use crate::vm::AnalyticsPanelVm;

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/projects", ProjectsView)] Projects {},
        #[route("/skills", SkillsView)] Skills {},
        #[route("/finance", FinanceView)] Finance {},
        #[route("/contact", ContactView)] Contact {},
}

impl Route {
    /// Page rendered by this route.
    #[must_use]
    pub fn page(&self) -> PageId {
        match self {
            Route::Home {} => PageId::Home,
            Route::Projects {} => PageId::Projects,
            Route::Skills {} => PageId::SkillsExperience,
            Route::Finance {} => PageId::FinanceUseCases,
            Route::Contact {} => PageId::Contact,
        }
    }
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Route::Home {},
            PageId::Projects => Route::Projects {},
            PageId::SkillsExperience => Route::Skills {},
            PageId::FinanceUseCases => Route::Finance {},
            PageId::Contact => Route::Contact {},
        }
    }
}

/// The sidebar is the only place that navigates, and it updates the session
/// before pushing a route, so the active page and the current route agree.
#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let session = use_browsing_session();
    let select = use_page_selector();
    let active = session.read().active();
    let panel = AnalyticsPanelVm::from_views(session.read().views());

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<SidebarTestHandles>() {
            handles.register(select, session);
        }
    });

    rsx! {
        nav { class: "sidebar",
            h1 { "Navigation" }
            p { class: "radio-caption", "Go to" }
            div { class: "nav-options", "role": "radiogroup", aria_label: "Go to",
                for page in PageId::ALL {
                    label {
                        key: "{page.slug()}",
                        class: "nav-option",
                        "data-selected": if page == active { "true" } else { "false" },
                        input {
                            r#type: "radio",
                            name: "page",
                            value: page.slug(),
                            checked: page == active,
                            onchange: move |_| select.call(page),
                        }
                        span { "{page}" }
                    }
                }
            }
            hr {}
            AnalyticsPanel { panel }
            hr {}
            ConnectLinks {}
        }
    }
}

#[component]
fn AnalyticsPanel(panel: AnalyticsPanelVm) -> Element {
    rsx! {
        section { class: "analytics",
            h2 { "📊 Session Analytics" }
            p { class: "analytics-total", "{panel.total_line}" }
            ul { class: "analytics-rows",
                for row in panel.rows.iter() {
                    li { key: "{row.page.slug()}", "{row.line}" }
                }
            }
        }
    }
}

#[component]
fn ConnectLinks() -> Element {
    let profile = use_context::<AppContext>().profile();
    let github_url = profile.github_url();
    let linkedin_url = profile.linkedin_url().to_string();
    let mailto = profile.mailto();

    rsx! {
        section { class: "connect",
            p { strong { "Connect with me:" } }
            ul {
                li { a { href: "{github_url}", "GitHub" } }
                li { a { href: "{linkedin_url}", "LinkedIn" } }
                if let Some(mailto) = mailto {
                    li { a { href: "{mailto}", "Email" } }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SidebarTestHandles {
    select: std::rc::Rc<std::cell::RefCell<Option<Callback<PageId>>>>,
    session: std::rc::Rc<std::cell::RefCell<Option<Signal<portfolio_core::BrowsingSession>>>>,
}

#[cfg(test)]
impl SidebarTestHandles {
    fn register(&self, select: Callback<PageId>, session: Signal<portfolio_core::BrowsingSession>) {
        *self.select.borrow_mut() = Some(select);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn select(&self) -> Callback<PageId> {
        self.select.borrow().expect("sidebar rendered")
    }

    pub(crate) fn session(&self) -> Signal<portfolio_core::BrowsingSession> {
        self.session.borrow().expect("sidebar rendered")
    }
}
