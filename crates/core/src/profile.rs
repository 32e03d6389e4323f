use thiserror::Error;
use url::Url;

pub const DEFAULT_OWNER_NAME: &str = "George Iordanous";
pub const DEFAULT_HEADLINE: &str = "Data & Finance Analytics • FP&A • Machine Learning";
pub const DEFAULT_GITHUB_USERNAME: &str = "negroniO";
pub const DEFAULT_LINKEDIN_URL: &str = "https://www.linkedin.com/in/george-iordanous";
pub const DEFAULT_EMAIL: &str = "george.iordanous@hotmail.com";
pub const DEFAULT_FEATURED_REPO_URL: &str = "https://github.com/negroniO/payment-recovery-ml";
pub const DEFAULT_FEATURED_APP_URL: &str = "https://payment-recovery-ml.streamlit.app";

/// Contact handles and links rendered by the portfolio pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    owner_name: String,
    headline: String,
    github_username: String,
    linkedin_url: String,
    email: Option<String>,
    featured_repo_url: String,
    featured_app_url: String,
}

/// Unvalidated profile values, e.g. collected from CLI flags and environment.
#[derive(Clone, Debug)]
pub struct ProfileDraft {
    pub owner_name: String,
    pub headline: String,
    pub github_username: String,
    pub linkedin_url: String,
    pub email: Option<String>,
    pub featured_repo_url: String,
    pub featured_app_url: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("owner name cannot be empty")]
    EmptyOwnerName,
    #[error("GitHub username cannot be empty")]
    EmptyGithubUsername,
    #[error("invalid {field} URL: {raw}")]
    InvalidUrl { field: &'static str, raw: String },
    #[error("invalid email address: {raw}")]
    InvalidEmail { raw: String },
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            owner_name: DEFAULT_OWNER_NAME.to_string(),
            headline: DEFAULT_HEADLINE.to_string(),
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            linkedin_url: DEFAULT_LINKEDIN_URL.to_string(),
            email: Some(DEFAULT_EMAIL.to_string()),
            featured_repo_url: DEFAULT_FEATURED_REPO_URL.to_string(),
            featured_app_url: DEFAULT_FEATURED_APP_URL.to_string(),
        }
    }
}

impl ProfileDraft {
    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` when a required field is blank, a link is not a
    /// valid URL, or the email has no `@`.
    pub fn validate(self) -> Result<Profile, ProfileError> {
        let owner_name = self.owner_name.trim().to_string();
        if owner_name.is_empty() {
            return Err(ProfileError::EmptyOwnerName);
        }

        let github_username = self.github_username.trim().trim_start_matches('@').to_string();
        if github_username.is_empty() {
            return Err(ProfileError::EmptyGithubUsername);
        }

        let linkedin_url = validate_url("LinkedIn", &self.linkedin_url)?;
        let featured_repo_url = validate_url("project repository", &self.featured_repo_url)?;
        let featured_app_url = validate_url("live app", &self.featured_app_url)?;

        let email = normalize_optional(self.email);
        if let Some(email) = email.as_ref() {
            if !is_plausible_email(email) {
                return Err(ProfileError::InvalidEmail { raw: email.clone() });
            }
        }

        Ok(Profile::from_draft(ProfileDraft {
            owner_name,
            headline: self.headline.trim().to_string(),
            github_username,
            linkedin_url,
            email,
            featured_repo_url,
            featured_app_url,
        }))
    }
}

impl Profile {
    /// Takes the draft fields as they are; `validate` normalizes first.
    fn from_draft(draft: ProfileDraft) -> Self {
        Self {
            owner_name: draft.owner_name,
            headline: draft.headline,
            github_username: draft.github_username,
            linkedin_url: draft.linkedin_url,
            email: draft.email,
            featured_repo_url: draft.featured_repo_url,
            featured_app_url: draft.featured_app_url,
        }
    }

    #[must_use]
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// First word of the owner name, used in the greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.owner_name
            .split_whitespace()
            .next()
            .unwrap_or(self.owner_name.as_str())
    }

    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    #[must_use]
    pub fn github_username(&self) -> &str {
        &self.github_username
    }

    #[must_use]
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }

    #[must_use]
    pub fn linkedin_url(&self) -> &str {
        &self.linkedin_url
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }

    #[must_use]
    pub fn featured_repo_url(&self) -> &str {
        &self.featured_repo_url
    }

    #[must_use]
    pub fn featured_app_url(&self) -> &str {
        &self.featured_app_url
    }

    /// Title used for the window and document.
    #[must_use]
    pub fn site_title(&self) -> String {
        format!("{} | Data & Finance Portfolio", self.owner_name)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::from_draft(ProfileDraft::default())
    }
}

fn validate_url(field: &'static str, raw: &str) -> Result<String, ProfileError> {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(trimmed.to_string()),
        _ => Err(ProfileError::InvalidUrl {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
