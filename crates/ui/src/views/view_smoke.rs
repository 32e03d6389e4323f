use portfolio_core::{BrowsingSession, PageId, ProfileDraft};

use super::test_harness::{ViewKind, render_view, setup_view_harness, setup_view_harness_with};

fn session_after(pages: &[PageId]) -> BrowsingSession {
    let mut session = BrowsingSession::start(PageId::Home);
    for page in pages {
        session.navigate(*page);
    }
    session
}

fn render_with(view: ViewKind, draft: ProfileDraft, session: BrowsingSession) -> String {
    let profile = draft.validate().expect("valid profile");
    let mut harness = setup_view_harness_with(view, profile, session);
    harness.rebuild();
    harness.render()
}

#[test]
fn home_view_smoke_renders_greeting_metrics_and_caption() {
    let html = render_view(ViewKind::Page(PageId::Home));

    assert!(html.contains("George 👋"), "missing greeting in {html}");
    assert!(html.contains("Years in Finance / Analytics"), "missing metric in {html}");
    assert!(html.contains("Portfolio Overview"), "missing overview in {html}");
    assert!(html.contains("<strong>SQL data models</strong>"), "missing markdown in {html}");
    assert!(
        html.contains("This page viewed 1 time this session."),
        "missing caption in {html}"
    );
}

#[test]
fn projects_view_smoke_renders_cards_tags_and_links() {
    let html = render_view(ViewKind::Page(PageId::Projects));

    assert_eq!(html.matches("class=\"card\"").count(), 3, "cards in {html}");
    assert!(html.contains("Payment Recovery ML"), "missing project in {html}");
    assert!(html.contains("tag tag-sql"), "missing tag class in {html}");
    assert!(
        html.contains("https://github.com/negroniO/payment-recovery-ml"),
        "missing repo link in {html}"
    );
    assert!(
        html.contains("https://payment-recovery-ml.streamlit.app"),
        "missing app link in {html}"
    );
    assert!(html.contains("Add GitHub link when ready."), "missing note in {html}");
    assert!(
        html.contains("This page viewed 0 times this session."),
        "page not visited yet in {html}"
    );
}

#[test]
fn skills_view_smoke_renders_sections() {
    let html = render_view(ViewKind::Page(PageId::SkillsExperience));

    assert!(html.contains("Technical Skills"), "missing skills in {html}");
    assert!(html.contains("Finance &amp; Business Experience"), "missing experience in {html}");
    assert!(html.contains("IBM Data Science Certificate"), "missing education in {html}");
}

#[test]
fn finance_view_smoke_renders_use_cases() {
    let html = render_view(ViewKind::Page(PageId::FinanceUseCases));

    assert!(html.contains("<h3>"), "headings not rendered in {html}");
    assert!(html.contains("Credit Control"), "missing use case in {html}");
    assert!(html.contains("Self-Service Reporting"), "missing use case in {html}");
}

#[test]
fn contact_view_smoke_renders_links_and_email() {
    let html = render_view(ViewKind::Page(PageId::Contact));

    assert!(html.contains("@negroniO"), "missing handle in {html}");
    assert!(html.contains("https://www.linkedin.com/in/george-iordanous"), "missing linkedin in {html}");
    assert!(html.contains("george.iordanous@hotmail.com"), "missing email in {html}");
}

#[test]
fn contact_view_smoke_hides_missing_email() {
    let draft = ProfileDraft {
        email: None,
        ..ProfileDraft::default()
    };
    let html = render_with(
        ViewKind::Page(PageId::Contact),
        draft,
        BrowsingSession::start(PageId::Home),
    );

    assert!(!html.contains("Email:"), "unexpected email line in {html}");
}

#[test]
fn contact_caption_reflects_its_own_count() {
    let session = session_after(&[PageId::Contact, PageId::Home, PageId::Contact]);
    let html = render_with(ViewKind::Page(PageId::Contact), ProfileDraft::default(), session);

    assert!(
        html.contains("This page viewed 2 times this session."),
        "missing caption in {html}"
    );
}

#[test]
fn shell_smoke_renders_sidebar_for_fresh_session() {
    let html = render_view(ViewKind::Shell);

    assert!(html.contains("Navigation"), "missing title in {html}");
    for label in ["Home", "Projects", "Skills &amp; Experience", "Finance Use Cases", "Contact"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert_eq!(
        html.matches("data-selected=\"true\"").count(),
        1,
        "exactly one active page in {html}"
    );
    assert!(html.contains("Total page views: 1"), "missing total in {html}");
    assert!(html.contains("Home: 1"), "missing row in {html}");
    assert!(html.contains("Portfolio Overview"), "home not routed in {html}");
    assert!(html.contains("mailto:george.iordanous@hotmail.com"), "missing email link in {html}");
}

#[test]
fn shell_smoke_renders_breakdown_in_first_visit_order() {
    let session = session_after(&[PageId::FinanceUseCases, PageId::Home]);
    let html = render_with(ViewKind::Shell, ProfileDraft::default(), session);

    assert!(html.contains("Total page views: 3"), "missing total in {html}");
    let home = html.find("Home: 2").expect("home row");
    let finance = html.find("Finance Use Cases: 1").expect("finance row");
    assert!(home < finance, "rows out of order in {html}");
    assert!(!html.contains("Contact: "), "unvisited page listed in {html}");
}

#[test]
fn shell_smoke_sidebar_selection_counts_and_routes() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();

    harness.select_page(PageId::Projects);
    let html = harness.render();
    assert!(html.contains("Payment Recovery ML"), "projects not routed in {html}");
    assert!(!html.contains("Portfolio Overview"), "home still routed in {html}");
    assert!(html.contains("Total page views: 2"), "missing total in {html}");
    assert!(html.contains("Home: 1"), "missing home row in {html}");
    assert!(html.contains("Projects: 1"), "missing projects row in {html}");
    assert!(
        html.contains("This page viewed 1 time this session."),
        "missing caption in {html}"
    );
    assert_eq!(
        html.matches("data-selected=\"true\"").count(),
        1,
        "exactly one active page in {html}"
    );
    let selected = html.find("data-selected=\"true\"").expect("active option");
    let projects_value = html.find("value=\"projects\"").expect("projects option");
    let home_value = html.find("value=\"home\"").expect("home option");
    assert!(
        home_value < selected && selected < projects_value,
        "active option is not Projects in {html}"
    );

    harness.select_page(PageId::Projects);
    harness.rerender();
    let html = harness.render();
    assert!(html.contains("Total page views: 2"), "re-selection counted in {html}");
    assert!(html.contains("Projects: 1"), "re-selection counted in {html}");
    assert_eq!(harness.session_total(), 2);
    assert_eq!(harness.session_count(PageId::Projects), 1);

    harness.select_page(PageId::Home);
    let html = harness.render();
    assert!(html.contains("Portfolio Overview"), "home not routed in {html}");
    assert!(html.contains("Total page views: 3"), "missing total in {html}");
    assert!(html.contains("Home: 2"), "missing home row in {html}");
    assert_eq!(harness.session_count(PageId::Home), 2);
}
