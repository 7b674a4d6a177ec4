use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::RouterState;
use crate::access::{AccessDecision, evaluate};
use crate::catalog::{LoadStrategy, RouteCatalog, RouteCategory, RouteDescriptor};
use crate::loader::{Component, LoadError};
use crate::navigate::NavigateOptions;

// --- Chrome Selection ---

/// Chrome
///
/// The surrounding navigation/header UI wrapped around a route's content.
/// Selection is purely category-driven; note that the auth-page categories
/// render chrome-free (login pages carry no header), not inside their area's
/// chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Chrome {
    None,
    Public,
    Admin,
    Customer,
}

/// chrome_for
///
/// Category → chrome mapping.
pub fn chrome_for(category: RouteCategory) -> Chrome {
    match category {
        RouteCategory::Public => Chrome::Public,
        RouteCategory::AdminProtected => Chrome::Admin,
        RouteCategory::CustomerProtected => Chrome::Customer,
        // Login/signup pages and the shell entries render bare.
        RouteCategory::AdminAuth
        | RouteCategory::CustomerAuth
        | RouteCategory::Immediate
        | RouteCategory::Fallback => Chrome::None,
    }
}

// --- Path Matching ---

/// A single segment of a URL pattern: literal text or a `:param` capture.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// PathPattern
///
/// A parsed URL pattern supporting `:param` segments and the `*` catch-all.
/// Matching is segment-wise and exact in length; the catch-all matches
/// anything and captures nothing.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    catch_all: bool,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "*" {
            return Self {
                raw: pattern.to_string(),
                segments: Vec::new(),
                catch_all: true,
            };
        }

        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
            catch_all: false,
        }
    }

    /// matches
    ///
    /// Returns the captured `:param` values when `path` matches this
    /// pattern, `None` otherwise. The root pattern `/` has zero segments and
    /// matches only the root path.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        if self.catch_all {
            return Some(Vec::new());
        }

        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if text.as_str() != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.push((name.clone(), part.to_string()));
                }
            }
        }
        Some(params)
    }

    /// param_count
    ///
    /// How many capture segments this pattern has. Patterns with fewer
    /// captures are more specific and must match first.
    pub fn param_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Param(_)))
            .count()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

// --- Route Slot State Machine ---

/// SlotPhase
///
/// Lifecycle of a single route's render slot:
/// `Unresolved → Resolving (placeholder shown) → Resolved | Failed`.
/// Eager entries skip `Resolving` by resolving at preload time; re-entry to
/// a `Resolved` slot never re-triggers `Resolving`. A `Failed` slot stays
/// observably failed (never a silent blank page) until explicitly reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPhase {
    Unresolved,
    Resolving,
    Resolved(Component),
    Failed(LoadError),
}

/// RouteSlot
///
/// Per-route render slot state. Each entry owns its slot, so one route's
/// pending resolution never blocks or corrupts a sibling's.
///
/// The epoch counter implements cancellation: unmounting the slot bumps the
/// epoch, and an in-flight resolution that completes against a stale epoch
/// discards its result instead of updating the now-unmounted slot.
struct RouteSlot {
    phase: Mutex<SlotPhase>,
    epoch: AtomicU64,
    /// Serializes resolution per slot: a second navigation arriving while the
    /// first is still fetching waits here instead of double-fetching.
    resolve_gate: tokio::sync::Mutex<()>,
}

impl RouteSlot {
    fn new() -> Self {
        Self {
            phase: Mutex::new(SlotPhase::Unresolved),
            epoch: AtomicU64::new(0),
            resolve_gate: tokio::sync::Mutex::new(()),
        }
    }

    fn phase(&self) -> SlotPhase {
        self.phase.lock().expect("slot lock poisoned").clone()
    }

    fn set_phase(&self, phase: SlotPhase) {
        *self.phase.lock().expect("slot lock poisoned") = phase;
    }
}

// --- Render Entries ---

/// RenderEntry
///
/// A catalog descriptor made renderable: pattern compiled, chrome selected,
/// gate flag fixed, slot allocated. Constructed once by the composer.
pub struct RenderEntry {
    pub descriptor: RouteDescriptor,
    pub chrome: Chrome,
    /// Only the two protected categories carry the access gate; every other
    /// category renders unconditionally (subject to its loading state).
    pub gated: bool,
    pattern: PathPattern,
    slot: RouteSlot,
}

impl RenderEntry {
    fn new(descriptor: RouteDescriptor) -> Self {
        let pattern = PathPattern::parse(&descriptor.path);
        let chrome = chrome_for(descriptor.category);
        let gated = matches!(
            descriptor.category,
            RouteCategory::AdminProtected | RouteCategory::CustomerProtected
        );
        Self {
            descriptor,
            chrome,
            gated,
            pattern,
            slot: RouteSlot::new(),
        }
    }

    fn is_fallback(&self) -> bool {
        self.descriptor.category == RouteCategory::Fallback
    }
}

// --- Navigation Outcomes ---

/// RenderOutcome
///
/// What a navigation produced. `Redirected` means the gate denied access and
/// the navigation primitive has already been invoked; `LoadFailed` means the
/// slot is parked in its observable `Failed` state; `Cancelled` means the
/// slot was unmounted while its component was still resolving and the result
/// was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Mounted {
        component: Component,
        chrome: Chrome,
        params: Vec<(String, String)>,
    },
    Redirected {
        to: String,
        origin: Option<String>,
    },
    LoadFailed {
        error: LoadError,
    },
    Cancelled,
    NoMatch,
}

// --- The Composer Runtime ---

/// PortalRouter
///
/// Assembles the final routing table from the catalog and drives navigation:
/// match → gate → resolve → mount. Entries are sorted most-specific-first
/// (static paths beat `:param` patterns of the same shape) with the fallback
/// catch-all pinned last, so `/admin/login/super` can never be captured by a
/// broader parameterized pattern.
pub struct PortalRouter {
    entries: Vec<RenderEntry>,
    state: RouterState,
}

impl PortalRouter {
    /// new
    ///
    /// Compiles every catalog descriptor into a render entry and fixes the
    /// matching order. The sort is stable, so declaration order breaks ties.
    pub fn new(catalog: &RouteCatalog, state: RouterState) -> Self {
        let mut entries: Vec<RenderEntry> = catalog
            .iter()
            .cloned()
            .map(RenderEntry::new)
            .collect();

        entries.sort_by_key(|e| (e.is_fallback(), e.pattern.param_count()));

        Self { entries, state }
    }

    /// match_route
    ///
    /// Resolves a concrete path to its render entry plus captured params.
    /// First match in specificity order wins; the fallback matches only when
    /// nothing else does.
    pub fn match_route(&self, path: &str) -> Option<(&RenderEntry, Vec<(String, String)>)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
    }

    /// navigate
    ///
    /// Drives one navigation event end to end. For gated entries the access
    /// decision runs to completion BEFORE component resolution begins, so a
    /// denied visitor can never observe even the fetch of protected content.
    pub async fn navigate(&self, path: &str) -> RenderOutcome {
        let Some((entry, params)) = self.match_route(path) else {
            tracing::warn!(path = %path, "navigation matched no route and no fallback is registered");
            return RenderOutcome::NoMatch;
        };

        tracing::debug!(
            path = %path,
            route = %entry.pattern.raw(),
            category = ?entry.descriptor.category,
            "navigation matched"
        );

        if entry.gated {
            let session = self.state.session.snapshot();
            match evaluate(
                &session,
                entry.descriptor.category,
                path,
                None,
                &self.state.config,
            ) {
                AccessDecision::Allow => {}
                AccessDecision::RedirectTo {
                    path: to,
                    preserve_origin,
                } => {
                    let origin = preserve_origin.then(|| path.to_string());
                    self.state.navigator.navigate(
                        &to,
                        NavigateOptions {
                            replace: true,
                            origin: origin.clone(),
                        },
                    );
                    return RenderOutcome::Redirected { to, origin };
                }
            }
        }

        match self.ensure_resolved(entry).await {
            Ok(Some(component)) => RenderOutcome::Mounted {
                component,
                chrome: entry.chrome,
                params,
            },
            Ok(None) => RenderOutcome::Cancelled,
            Err(error) => {
                tracing::warn!(route = %entry.pattern.raw(), error = %error, "component resolution failed");
                RenderOutcome::LoadFailed { error }
            }
        }
    }

    /// preload_eager
    ///
    /// Resolves every `Eager` entry up front (before first paint). A failure
    /// parks that entry's slot in `Failed` and is logged; it never prevents
    /// the remaining eager entries from resolving.
    pub async fn preload_eager(&self) {
        for entry in &self.entries {
            if entry.descriptor.load == LoadStrategy::Eager {
                if let Err(error) = self.ensure_resolved(entry).await {
                    tracing::warn!(
                        route = %entry.pattern.raw(),
                        error = %error,
                        "eager preload failed"
                    );
                }
            }
        }
    }

    /// slot_phase
    ///
    /// Observability hook for the render layer: the current lifecycle phase
    /// of the entry declared with exactly this pattern.
    pub fn slot_phase(&self, pattern: &str) -> Option<SlotPhase> {
        self.entry_by_pattern(pattern).map(|e| e.slot.phase())
    }

    /// unmount_slot
    ///
    /// Signals that the slot for this pattern left the screen. Any in-flight
    /// resolution is cancelled by bumping the slot epoch: when the fetch
    /// eventually completes it will observe the stale epoch and discard its
    /// result rather than update an unmounted slot. An already-resolved
    /// component stays cached, so re-entry does not re-trigger `Resolving`.
    pub fn unmount_slot(&self, pattern: &str) {
        if let Some(entry) = self.entry_by_pattern(pattern) {
            entry.slot.epoch.fetch_add(1, Ordering::SeqCst);
            let mut phase = entry.slot.phase.lock().expect("slot lock poisoned");
            if *phase == SlotPhase::Resolving {
                *phase = SlotPhase::Unresolved;
            }
        }
    }

    /// reset_slot
    ///
    /// Clears a `Failed` slot back to `Unresolved` so a later navigation can
    /// retry the fetch. No automatic retry policy exists; retrying is the
    /// caller's decision.
    pub fn reset_slot(&self, pattern: &str) {
        if let Some(entry) = self.entry_by_pattern(pattern) {
            let mut phase = entry.slot.phase.lock().expect("slot lock poisoned");
            if matches!(*phase, SlotPhase::Failed(_)) {
                *phase = SlotPhase::Unresolved;
            }
        }
    }

    fn entry_by_pattern(&self, pattern: &str) -> Option<&RenderEntry> {
        self.entries.iter().find(|e| e.pattern.raw() == pattern)
    }

    /// ensure_resolved
    ///
    /// Resolves an entry's component through its slot state machine.
    /// `Ok(None)` means the slot was unmounted mid-resolution and the result
    /// was discarded.
    async fn ensure_resolved(&self, entry: &RenderEntry) -> Result<Option<Component>, LoadError> {
        // Fast path: a resolved slot is served from cache, a failed slot
        // stays failed until reset.
        match entry.slot.phase() {
            SlotPhase::Resolved(component) => return Ok(Some(component)),
            SlotPhase::Failed(error) => return Err(error),
            SlotPhase::Unresolved | SlotPhase::Resolving => {}
        }

        // Per-slot serialization: concurrent navigations to the same route
        // fetch once. Other routes' slots are untouched by this lock.
        let _gate = entry.slot.resolve_gate.lock().await;

        // Re-check: the slot may have resolved while we waited for the gate.
        match entry.slot.phase() {
            SlotPhase::Resolved(component) => return Ok(Some(component)),
            SlotPhase::Failed(error) => return Err(error),
            SlotPhase::Unresolved | SlotPhase::Resolving => {}
        }

        let epoch = entry.slot.epoch.load(Ordering::SeqCst);
        entry.slot.set_phase(SlotPhase::Resolving);

        let result = self.state.source.load(&entry.descriptor.component).await;

        // Cancellation check: an unmount while the fetch was in flight bumped
        // the epoch; in that case the slot must not be written to at all.
        if entry.slot.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(route = %entry.pattern.raw(), "resolution discarded after unmount");
            return Ok(None);
        }

        match result {
            Ok(component) => {
                entry.slot.set_phase(SlotPhase::Resolved(component.clone()));
                Ok(Some(component))
            }
            Err(error) => {
                entry.slot.set_phase(SlotPhase::Failed(error.clone()));
                Err(error)
            }
        }
    }
}
