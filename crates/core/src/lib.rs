#![forbid(unsafe_code)]

pub mod model;
pub mod profile;
pub mod session;

pub use model::{PageCounts, PageId, ParsePageError, SessionViewState};
pub use profile::{Profile, ProfileDraft, ProfileError};
pub use session::{BrowsingSession, NavigationOutcome, SessionId};
