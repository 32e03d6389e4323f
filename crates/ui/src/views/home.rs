use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::context::AppContext;
use crate::views::components::{Card, Markdown, Metric, PageViewsCaption};

const BANNER_URL: &str =
    "https://raw.githubusercontent.com/negroniO/payment-recovery-ml/main/assets/banner.png";

const INTRO: &str = "
    I combine **finance**, **SQL**, and **machine learning** to build tools that improve
    collections, forecasting, and decision-making.

    I recently finished a **Master’s in Data Analytics in Accounting & Finance** and I'm working
    as an **FP&A analyst**, applying analytics directly to meaningful business problems.
";

const OVERVIEW: &str = "
    This portfolio showcases projects where I:

    - Build **SQL data models**
    - Develop **machine learning pipelines**
    - Deploy **analytics apps** for real users
    - Focus on **finance analytics**: DSO, collections, recovery, AR
";

#[component]
pub fn HomeView() -> Element {
    let profile = use_context::<AppContext>().profile();
    let greeting = format!("Hi, I'm {} 👋", profile.first_name());
    let headline = profile.headline().to_string();

    rsx! {
        div { class: "page page-home",
            p { class: "banner",
                img { src: BANNER_URL, alt: "Portfolio banner", width: "80%" }
            }
            h1 { class: "greeting", "{greeting}" }
            h3 { class: "headline", "{headline}" }

            Card {
                Markdown { source: INTRO }
                div { class: "metrics",
                    Metric { label: "Years in Finance / Analytics", value: "5+" }
                    Metric { label: "ML / Analytics Projects", value: "5+" }
                    Metric { label: "Tech Stack", value: "Python • SQL • BI" }
                }
                hr {}
                h3 { "🔍 Portfolio Overview" }
                Markdown { source: OVERVIEW }
            }

            PageViewsCaption { page: PageId::Home }
        }
    }
}
