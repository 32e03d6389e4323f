use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::views::components::{Card, Markdown, PageViewsCaption};

const CORE_SKILLS: &str = "
    **Languages & Core:**
    - Python
    - SQL (PostgreSQL, Presto)
    - R (basic)

    **ML & Stats:**
    - scikit-learn
    - Time series forecasting
    - Model evaluation (PR AUC, Brier, Lift)
    - Calibration
";

const TOOLING_SKILLS: &str = "
    **Data & Engineering:**
    - Pandas, NumPy
    - ETL & data cleaning
    - SQL feature engineering
    - API automation

    **Apps & BI:**
    - Streamlit
    - Tableau
    - Power BI
    - Excel (advanced)
";

const EXPERIENCE: &str = "
    - FP&A: budgeting, variance analysis, forecasting
    - Credit control & collections
    - Payment operations: card payments, settlement, chargebacks
    - Finance reporting and KPI dashboards
";

const EDUCATION: &str = "
    - **IBM Data Science Certificate**
    - **MSc – Data Analytics in Accounting & Finance**
    - **BSc – Economics**
";

#[component]
pub fn SkillsView() -> Element {
    rsx! {
        div { class: "page page-skills",
            h1 { "🛠 Skills & Experience" }

            Card {
                h3 { "Technical Skills" }
                div { class: "columns",
                    div { class: "column", Markdown { source: CORE_SKILLS } }
                    div { class: "column", Markdown { source: TOOLING_SKILLS } }
                }
            }
            Card {
                h3 { "Finance & Business Experience" }
                Markdown { source: EXPERIENCE }
            }
            Card {
                h3 { "Education" }
                Markdown { source: EDUCATION }
            }

            PageViewsCaption { page: PageId::SkillsExperience }
        }
    }
}
