use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the navigable pages of the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Home,
    Projects,
    SkillsExperience,
    FinanceUseCases,
    Contact,
}

impl PageId {
    /// Every page, in the order the selector lists them.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Projects,
        PageId::SkillsExperience,
        PageId::FinanceUseCases,
        PageId::Contact,
    ];

    /// Human-readable label shown in the navigation selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Projects => "Projects",
            PageId::SkillsExperience => "Skills & Experience",
            PageId::FinanceUseCases => "Finance Use Cases",
            PageId::Contact => "Contact",
        }
    }

    /// URL-safe identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Projects => "projects",
            PageId::SkillsExperience => "skills-experience",
            PageId::FinanceUseCases => "finance-use-cases",
            PageId::Contact => "contact",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown page: {raw:?}")]
pub struct ParsePageError {
    raw: String,
}

impl ParsePageError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl FromStr for PageId {
    type Err = ParsePageError;

    /// Accepts either the label or the slug, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PageId::ALL
            .into_iter()
            .find(|page| {
                page.label().eq_ignore_ascii_case(needle) || page.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParsePageError { raw: s.to_string() })
    }
}
