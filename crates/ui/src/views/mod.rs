mod components;
mod contact;
mod finance;
mod home;
mod projects;
mod skills;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{Card, Markdown, Metric, PageViewsCaption, TagKind, TagList};
pub use contact::ContactView;
pub use finance::FinanceView;
pub use home::HomeView;
pub use projects::ProjectsView;
pub use skills::SkillsView;
