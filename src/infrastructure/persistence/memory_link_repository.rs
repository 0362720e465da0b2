//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::StoreError;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;

/// Name reported for uniqueness violations, matching the PostgreSQL constraint.
const CODE_CONSTRAINT: &str = "short_links_code_key";

/// Process-local link store.
///
/// Holds the same invariants as the PostgreSQL store: ids are assigned
/// sequentially and a second insert for an existing code fails with
/// [`StoreError::Conflict`]. Data is lost when the process exits.
///
/// # Use Cases
///
/// - Running the service locally without PostgreSQL (`STORAGE=memory`)
/// - HTTP-level tests
pub struct InMemoryLinkRepository {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    links: Vec<Link>,
    next_id: i64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            state: Mutex::new(MemoryState {
                links: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Other("link store lock poisoned".to_string()))
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let mut state = self.lock()?;

        if state.links.iter().any(|l| l.code == new_link.code) {
            return Err(StoreError::conflict(CODE_CONSTRAINT));
        }

        let link = Link::new(
            state.next_id,
            new_link.code,
            new_link.original_url,
            Utc::now(),
        );
        state.next_id += 1;
        state.links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        let state = self.lock()?;
        Ok(state.links.iter().find(|l| l.code == code).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Link>, StoreError> {
        let state = self.lock()?;

        let mut links = state.links.clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(links)
    }

    async fn health_check(&self) -> bool {
        self.state.lock().is_ok()
    }
}
