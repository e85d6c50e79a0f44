//! In-memory cache of the leads table.

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::leads::search::search;
use crate::leads::source::LeadSource;
use crate::models::Lead;

/// Result of searching the cached rows.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub total: usize,
    pub leads: Vec<Lead>,
}

/// Holds the last successfully fetched rows. Starts empty.
#[derive(Default)]
pub struct LeadDirectory {
    leads: RwLock<Vec<Lead>>,
}

impl LeadDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches every row from `source` and replaces the cache.
    ///
    /// On failure the cache is left as it was.
    pub async fn refresh(&self, source: &dyn LeadSource) -> Result<usize, AppError> {
        let fetched = match source.fetch_all().await {
            Ok(leads) => leads,
            Err(e) => {
                warn!("Lead fetch failed, keeping {} cached rows", self.len().await);
                return Err(e);
            }
        };

        let count = fetched.len();
        *self.leads.write().await = fetched;
        info!("Lead directory loaded {count} leads");
        Ok(count)
    }

    pub async fn len(&self) -> usize {
        self.leads.read().await.len()
    }

    /// Searches the cached rows. See [`search`].
    pub async fn search(&self, term: &str) -> SearchResult {
        let leads = self.leads.read().await;
        SearchResult {
            total: leads.len(),
            leads: search(&leads, term).into_iter().cloned().collect(),
        }
    }
}
