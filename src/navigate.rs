use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// NavigateOptions
///
/// Options attached to an outbound navigation. `origin` carries the path the
/// visitor was trying to reach when a redirect interrupted them; the login
/// success handler reads it back to return them there. `replace` swaps the
/// current history entry instead of pushing a new one, so redirects do not
/// trap the back button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavigateOptions {
    pub replace: bool,
    pub origin: Option<String>,
}

/// Navigator
///
/// Contract for the external navigation primitive (History API wrapper).
/// The routing core invokes it for every `RedirectTo` decision; it never
/// navigates on `Allow`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, to: &str, options: NavigateOptions);
}

/// RecordingNavigator
///
/// In-memory navigator retaining every navigation request with its options.
/// Used in tests to assert redirect targets and carried origin state.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    navigations: Arc<Mutex<Vec<(String, NavigateOptions)>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigations(&self) -> Vec<(String, NavigateOptions)> {
        self.navigations
            .lock()
            .expect("navigator lock poisoned")
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, to: &str, options: NavigateOptions) {
        tracing::debug!(to = %to, replace = options.replace, origin = ?options.origin, "navigation issued");
        self.navigations
            .lock()
            .expect("navigator lock poisoned")
            .push((to.to_string(), options));
    }
}

/// NavigatorState
///
/// The concrete type used to share the navigation primitive across the router
/// state.
pub type NavigatorState = Arc<dyn Navigator>;
