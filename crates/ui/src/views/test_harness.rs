use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use portfolio_core::{BrowsingSession, PageId, Profile};

use crate::context::{UiApp, build_app_context};
use crate::routes::{Route, SidebarTestHandles};
use crate::session::use_session_provider;
use crate::views::{ContactView, FinanceView, HomeView, ProjectsView, SkillsView};

#[derive(Clone)]
struct TestApp {
    profile: Profile,
}

impl UiApp for TestApp {
    fn profile(&self) -> Profile {
        self.profile.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// A single page view, without the sidebar.
    Page(PageId),
    /// The full layout through the real router, starting at `/`.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    session: BrowsingSession,
    sidebar_handles: Option<SidebarTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let session = props.session.clone();
    use_session_provider(move || session);
    if let Some(handles) = props.sidebar_handles.clone() {
        use_context_provider(|| handles);
    }

    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        ViewKind::Page(_) => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Page(PageId::Home) => rsx! { HomeView {} },
        ViewKind::Page(PageId::Projects) => rsx! { ProjectsView {} },
        ViewKind::Page(PageId::SkillsExperience) => rsx! { SkillsView {} },
        ViewKind::Page(PageId::FinanceUseCases) => rsx! { FinanceView {} },
        ViewKind::Page(PageId::Contact) => rsx! { ContactView {} },
        ViewKind::Shell => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    /// Present for `ViewKind::Shell`, filled once the sidebar renders.
    pub sidebar_handles: Option<SidebarTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Pick `page` in the sidebar the way its radio `onchange` does.
    pub fn select_page(&mut self, page: PageId) {
        let select = self.shell_handles().select();
        self.dom.in_runtime(|| select.call(page));
        drive_dom(&mut self.dom);
    }

    /// Render the whole tree again without any navigation event.
    pub fn rerender(&mut self) {
        self.dom.mark_dirty(ScopeId::ROOT);
        drive_dom(&mut self.dom);
    }

    pub fn session_total(&self) -> u64 {
        let session = self.shell_handles().session();
        self.dom.in_runtime(|| session.peek().views().total())
    }

    pub fn session_count(&self, page: PageId) -> u32 {
        let session = self.shell_handles().session();
        self.dom.in_runtime(|| session.peek().views().count(page))
    }

    fn shell_handles(&self) -> SidebarTestHandles {
        self.sidebar_handles
            .clone()
            .expect("sidebar handles exist only for the shell")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness with the default profile and a fresh session started on Home.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Profile::default(), BrowsingSession::start(PageId::Home))
}

pub fn setup_view_harness_with(
    view: ViewKind,
    profile: Profile,
    session: BrowsingSession,
) -> ViewHarness {
    let sidebar_handles = (view == ViewKind::Shell).then(SidebarTestHandles::default);
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { profile }),
            view,
            session,
            sidebar_handles: sidebar_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        sidebar_handles,
    }
}

/// Render once and return the HTML.
pub fn render_view(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}
