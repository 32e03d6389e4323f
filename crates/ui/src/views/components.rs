use dioxus::prelude::*;
use portfolio_core::PageId;

use crate::session::use_browsing_session;
use crate::vm::{markdown_to_html, page_views_caption};

/// Accent colour of a tag pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Ml,
    Finance,
    App,
    Sql,
}

impl TagKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            TagKind::Ml => "tag tag-ml",
            TagKind::Finance => "tag tag-finance",
            TagKind::App => "tag tag-app",
            TagKind::Sql => "tag tag-sql",
        }
    }
}

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { class: "card", {children} }
    }
}

#[component]
pub fn TagList(tags: Vec<(&'static str, TagKind)>) -> Element {
    rsx! {
        div { class: "tags",
            for (label, kind) in tags {
                span { key: "{label}", class: kind.class(), "{label}" }
            }
        }
    }
}

#[component]
pub fn Metric(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div { class: "metric",
            p { class: "metric-label", "{label}" }
            p { class: "metric-value", "{value}" }
        }
    }
}

#[component]
pub fn Markdown(source: &'static str) -> Element {
    let html = markdown_to_html(source);
    rsx! {
        div { class: "markdown", dangerous_inner_html: "{html}" }
    }
}

/// Visit count of `page` for the current session.
#[component]
pub fn PageViewsCaption(page: PageId) -> Element {
    let session = use_browsing_session();
    let caption = page_views_caption(session.read().views().count(page));
    rsx! {
        p { class: "caption", "{caption}" }
    }
}
