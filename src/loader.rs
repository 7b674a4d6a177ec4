use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::catalog::{ComponentRef, RouteCatalog};

// --- Errors ---

/// LoadError
///
/// The only failure this core can produce: deferred component resolution is
/// an I/O-bound external operation and may fail. Everything else in the core
/// is total. Typed (rather than stringly) so the render layer can observe and
/// match on the failure instead of blanking the page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("no component registered for module '{0}'")]
    NotFound(String),
    #[error("failed to fetch module '{module}': {reason}")]
    Transport { module: String, reason: String },
}

// --- Resolved Components ---

/// Component
///
/// A resolved, mountable page component. In SPA terms: the evaluated module
/// of a code-split chunk. This core only needs an opaque handle; rendering
/// belongs to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Component {
    pub module: String,
}

impl Component {
    /// name
    ///
    /// The component's short name, i.e. the last segment of its module
    /// specifier. Used in logs and loading placeholders.
    pub fn name(&self) -> &str {
        self.module.rsplit('/').next().unwrap_or(&self.module)
    }
}

// 1. ComponentSource Contract
/// ComponentSource
///
/// Defines the abstract contract for resolving a component reference into a
/// mountable component. This trait is the core's single suspension point and
/// its single fallible operation. Implementations range from the real
/// chunk-fetching client to the in-memory stub used in tests, swappable
/// without touching the composer.
#[async_trait]
pub trait ComponentSource: Send + Sync {
    /// Resolves a component reference. May suspend indefinitely (bounded only
    /// by the underlying transport's own timeout behavior) and may fail; the
    /// caller owns making that failure observable.
    async fn load(&self, reference: &ComponentRef) -> Result<Component, LoadError>;
}

// 2. The Registry-Backed Implementation
/// StaticComponentSource
///
/// Resolves references against a fixed registry of known modules. This is the
/// production-shaped source for a bundle whose chunk manifest is known up
/// front: anything in the manifest resolves immediately, anything else is a
/// `NotFound`.
#[derive(Clone, Default)]
pub struct StaticComponentSource {
    registry: HashSet<String>,
}

impl StaticComponentSource {
    /// from_catalog
    ///
    /// Registers every module the catalog references.
    pub fn from_catalog(catalog: &RouteCatalog) -> Self {
        Self {
            registry: catalog
                .iter()
                .map(|d| d.component.module.clone())
                .collect(),
        }
    }
}

#[async_trait]
impl ComponentSource for StaticComponentSource {
    async fn load(&self, reference: &ComponentRef) -> Result<Component, LoadError> {
        if self.registry.contains(&reference.module) {
            Ok(Component {
                module: reference.module.clone(),
            })
        } else {
            Err(LoadError::NotFound(reference.module.clone()))
        }
    }
}

// 3. The Stub Implementation (For Tests)
/// StubComponentSource
///
/// A configurable stub used in unit and integration tests. It records every
/// load request (so tests can assert that gated routes never reach the
/// source), can simulate network latency, and can simulate transport
/// failures.
#[derive(Clone, Default)]
pub struct StubComponentSource {
    /// When true, all loads return a simulated transport failure.
    pub should_fail: bool,
    /// Optional artificial latency before each load completes.
    pub delay: Option<Duration>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StubComponentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// requested
    ///
    /// Every module specifier that reached this source, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("stub lock poisoned").clone()
    }
}

#[async_trait]
impl ComponentSource for StubComponentSource {
    async fn load(&self, reference: &ComponentRef) -> Result<Component, LoadError> {
        self.requested
            .lock()
            .expect("stub lock poisoned")
            .push(reference.module.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(LoadError::Transport {
                module: reference.module.clone(),
                reason: "stubbed network failure".to_string(),
            });
        }

        Ok(Component {
            module: reference.module.clone(),
        })
    }
}

/// ComponentState
///
/// The concrete type used to share the component source across the router
/// state.
pub type ComponentState = Arc<dyn ComponentSource>;
