use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::views::components::{Card, Markdown, PageViewsCaption};

const USE_CASES: &str = "
    ### 1️⃣ Payment Recovery & Collections
    - ML scoring
    - Expected value ranking
    - Prioritized outreach

    ### 2️⃣ DSO & Cash Flow Forecasting
    - DSO modeling
    - Cash inflow forecasts
    - Help treasury & FP&A

    ### 3️⃣ Credit Control & Risk
    - Behavior segmentation
    - Early risk detection

    ### 4️⃣ BI & Self-Service Reporting
    - Automating Excel
    - Tableau/Power BI dashboards
    - SQL analytics
";

#[component]
pub fn FinanceView() -> Element {
    rsx! {
        div { class: "page page-finance",
            h1 { "💼 Finance & Analytics Use Cases" }
            Card {
                Markdown { source: USE_CASES }
            }
            PageViewsCaption { page: PageId::FinanceUseCases }
        }
    }
}
