use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::context::AppContext;
use crate::views::components::{Card, Markdown, PageViewsCaption, TagKind, TagList};

const DEMO_URL: &str =
    "https://raw.githubusercontent.com/negroniO/payment-recovery-ml/main/assets/demo.gif";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProjectLinks {
    /// Repository and live app come from the profile.
    Featured,
    /// Placeholder note until a public link exists.
    Pending(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Project {
    title: &'static str,
    tags: &'static [(&'static str, TagKind)],
    summary: &'static str,
    links: ProjectLinks,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "1️⃣ Payment Recovery ML (End-to-End System)",
        tags: &[
            ("ML", TagKind::Ml),
            ("Finance", TagKind::Finance),
            ("Streamlit App", TagKind::App),
            ("SQL", TagKind::Sql),
        ],
        summary: "
            Predict which failed transactions will be recovered and prioritize outreach by
            **expected revenue**.

            - End-to-end ML pipeline
            - Logistic Regression with calibration
            - PR AUC, Brier score, lift analysis
            - Deployed as a Streamlit scoring app
        ",
        links: ProjectLinks::Featured,
    },
    Project {
        title: "2️⃣ Finance Collections & DSO Forecasting",
        tags: &[
            ("Time Series", TagKind::Ml),
            ("Finance", TagKind::Finance),
            ("DSO", TagKind::Finance),
        ],
        summary: "
            Forecast collections and DSO using **Prophet** to support planning and treasury.

            - Cash flow expectations
            - DSO forecasting
            - Trend detection
        ",
        links: ProjectLinks::Pending("➡ Add GitHub link when ready."),
    },
    Project {
        title: "3️⃣ SQL Analytics & BI Dashboards",
        tags: &[
            ("SQL", TagKind::Sql),
            ("BI", TagKind::App),
            ("Finance", TagKind::Finance),
        ],
        summary: "
            SQL-based dashboards for AR, collections, and operational analysis.

            - Window functions
            - Cohort logic
            - Tableau / Power BI dashboards
        ",
        links: ProjectLinks::Pending("➡ Add BI/SQL repo here later."),
    },
];

#[component]
pub fn ProjectsView() -> Element {
    rsx! {
        div { class: "page page-projects",
            h1 { "Projects" }
            for project in PROJECTS {
                ProjectCard { key: "{project.title}", project }
            }
            PageViewsCaption { page: PageId::Projects }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        Card {
            h3 { "{project.title}" }
            TagList { tags: project.tags.to_vec() }
            Markdown { source: project.summary }
            match project.links {
                ProjectLinks::Featured => rsx! { FeaturedLinks {} },
                ProjectLinks::Pending(note) => rsx! {
                    p { class: "info", "{note}" }
                },
            }
        }
    }
}

#[component]
fn FeaturedLinks() -> Element {
    let profile = use_context::<AppContext>().profile();
    let repo_url = profile.featured_repo_url().to_string();
    let app_url = profile.featured_app_url().to_string();

    rsx! {
        div { class: "columns",
            div { class: "column",
                p { a { href: "{repo_url}", "🔗 GitHub Repo" } }
                p { a { href: "{app_url}", "🌐 Live App" } }
            }
            div { class: "column",
                img { src: DEMO_URL, alt: "Payment recovery demo", width: "95%" }
            }
        }
    }
}
