use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::context::AppContext;
use crate::views::components::{Card, PageViewsCaption};

#[component]
pub fn ContactView() -> Element {
    let profile = use_context::<AppContext>().profile();
    let github_url = profile.github_url();
    let github_handle = format!("@{}", profile.github_username());
    let linkedin_url = profile.linkedin_url().to_string();
    let owner_name = profile.owner_name().to_string();
    let email = profile.email().map(str::to_owned);

    rsx! {
        div { class: "page page-contact",
            h1 { "Contact & Links" }
            Card {
                p { "If you'd like to connect:" }
                ul {
                    li {
                        strong { "GitHub:" }
                        " "
                        a { href: "{github_url}", "{github_handle}" }
                    }
                    li {
                        strong { "LinkedIn:" }
                        " "
                        a { href: "{linkedin_url}", "{owner_name}" }
                    }
                    if let Some(email) = email {
                        li {
                            strong { "Email:" }
                            " "
                            span { class: "email", "{email}" }
                        }
                    }
                }
                hr {}
                p { "If you viewed this portfolio, feel free to reach out or star a project you liked 🙂" }
            }
            PageViewsCaption { page: PageId::Contact }
        }
    }
}
