use std::sync::Arc;

use portfolio_core::Profile;

/// What the hosting binary supplies to the UI.
pub trait UiApp: Send + Sync {
    fn profile(&self) -> Profile;
}

#[derive(Clone)]
pub struct AppContext {
    profile: Arc<Profile>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            profile: Arc::new(app.profile()),
        }
    }

    #[must_use]
    pub fn profile(&self) -> Arc<Profile> {
        Arc::clone(&self.profile)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
