//! Item Loader
//!
//! One-shot load of the item list, tied to the lifetime of the view that asked for it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::ItemSource;
use crate::error::LoadError;
use crate::models::Item;

/// Load status as seen by the view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    NotStarted,
    Loading,
    Loaded(Vec<Item>),
    Failed(LoadError),
}

impl LoadStatus {
    /// Items to display. Only a successful load has any.
    pub fn items(&self) -> &[Item] {
        match self {
            LoadStatus::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, LoadStatus::Loaded(_) | LoadStatus::Failed(_))
    }

    /// Status after a load finishes. A success replaces the list wholesale.
    pub fn complete(result: Result<Vec<Item>, LoadError>) -> Self {
        match result {
            Ok(items) => LoadStatus::Loaded(items),
            Err(err) => LoadStatus::Failed(err),
        }
    }

    /// Short name used in markup attributes
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::NotStarted => "not-started",
            LoadStatus::Loading => "loading",
            LoadStatus::Loaded(_) => "loaded",
            LoadStatus::Failed(_) => "failed",
        }
    }
}

/// Cancellation token for a mounted view.
///
/// Clones share the same flag; once cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

/// Whether a finished load reached the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    Discarded,
}

/// Run a single load and hand the finished status to `apply`.
///
/// Failures are logged, never retried. If `lifetime` was cancelled while the
/// request was in flight the result is dropped and `apply` is not called.
pub async fn load_once<S, F>(source: &S, lifetime: &Lifetime, apply: F) -> Applied
where
    S: ItemSource,
    F: FnOnce(LoadStatus),
{
    let result = source.list_items().await;

    if !lifetime.is_alive() {
        log::debug!(target: "loader", "view gone before items arrived, dropping result");
        return Applied::Discarded;
    }

    match &result {
        Ok(items) => log::info!(target: "loader", "loaded {} items", items.len()),
        Err(err) => log::error!(target: "loader", "there was an error fetching the items: {}", err),
    }

    apply(LoadStatus::complete(result));
    Applied::Yes
}
