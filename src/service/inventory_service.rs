use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::{debug, error, info, instrument, warn};

use super::params::{title_from_query, InventoryParams, QueryParams};
use super::reply::{quoted, Reply};
use crate::domain::{InventoryRecord, TitleFilter};
use crate::metadata::MetadataLookup;
use crate::store::RecordStore;

/// Exclusive upper bound of the SKU draw.
pub const SKU_RANGE: u32 = 1000;

/// Draws a SKU uniformly from `[0, 1000)` with a generator seeded from the
/// current time. SKUs are not checked for uniqueness.
pub fn random_sku() -> u32 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(seed).gen_range(0..SKU_RANGE)
}

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Reject malformed numeric/boolean fields with 400 instead of defaulting them.
    pub strict_params: bool,
}

/// Stateless handler for the four inventory operations.
///
/// Every write is an existence check followed by a separate store call, so two
/// concurrent requests for the same title can interleave between the check
/// and the write. Nothing here serializes them.
pub struct InventoryService {
    store: Arc<dyn RecordStore>,
    lookup: Arc<dyn MetadataLookup>,
    next_sku_fn: Box<dyn Fn() -> u32 + Send + Sync>,
    config: ServiceConfig,
}

impl InventoryService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        lookup: Arc<dyn MetadataLookup>,
        config: ServiceConfig,
    ) -> Self {
        Self::with_sku_fn(store, lookup, config, random_sku)
    }

    pub fn with_sku_fn(
        store: Arc<dyn RecordStore>,
        lookup: Arc<dyn MetadataLookup>,
        config: ServiceConfig,
        next_sku_fn: impl Fn() -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self {
            store,
            lookup,
            next_sku_fn: Box::new(next_sku_fn),
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Looks the title up with the metadata provider and in the local store.
    ///
    /// A provider failure is reported as 404 but does not stop the store
    /// lookup. A local miss returns whatever has been decided so far.
    #[instrument(skip(self))]
    pub async fn search(&self, title: &str) -> Reply {
        let mut reply = Reply::empty();

        let metadata = match self.lookup.search_by_title(title).await {
            Ok(games) => Some(games),
            Err(e) => {
                warn!(error = %e, "Metadata lookup failed");
                reply = Reply::line(StatusCode::NOT_FOUND, format!("(Error) No such title: {}", quoted(title)));
                None
            }
        };

        let Some(record) = self.find(title).await else {
            debug!("Title not in local inventory");
            return reply;
        };

        match metadata {
            Some(metadata) => {
                info!(matches = metadata.len(), "Title found");
                Reply::json(
                    StatusCode::OK,
                    json!({ "title": title, "inventory": record, "metadata": metadata }),
                )
            }
            None => reply,
        }
    }

    /// Inserts a new record, or updates the existing one when the title is
    /// already present.
    pub async fn create(&self, query: &QueryParams) -> Reply {
        match self.parse(query) {
            Ok(params) => self.create_record(params).await,
            Err(reply) => reply,
        }
    }

    pub async fn update(&self, query: &QueryParams) -> Reply {
        match self.parse(query) {
            Ok(params) => self.update_record(params).await,
            Err(reply) => reply,
        }
    }

    #[instrument(skip(self, query), fields(title = %title_from_query(query)))]
    pub async fn delete(&self, query: &QueryParams) -> Reply {
        let title = title_from_query(query);

        if self.find(&title).await.is_none() {
            warn!("Delete of unknown title");
            return Reply::line(StatusCode::NOT_FOUND, format!("(Error) title does not exists: {}", quoted(&title)));
        }

        match self.store.delete_one(&TitleFilter::new(title)).await {
            Ok(deleted) => {
                info!(deleted, "Title deleted");
                Reply::line(StatusCode::OK, "title deleted without errors ")
            }
            Err(e) => {
                error!(error = %e, "Delete failed");
                Reply::line(StatusCode::OK, format!("(Error) delete request failed: {e}"))
            }
        }
    }

    #[instrument(skip(self, params), fields(title = %params.title))]
    async fn create_record(&self, params: InventoryParams) -> Reply {
        if let Some(existing) = self.find(&params.title).await {
            info!(id = %existing.id, "Title already exists, updating instead");
            let notice = Reply::line(
                StatusCode::OK,
                format!("(Error) title already exists, updating : {}", quoted(&params.title)),
            );
            return notice.then(self.update_record(params).await);
        }

        let sku = (self.next_sku_fn)();
        match self.store.insert_one(params.to_create(sku)).await {
            Ok(id) => {
                info!(%id, sku, "Title added");
                Reply::line(StatusCode::OK, "Title added without errors ")
            }
            Err(e) => {
                error!(error = %e, "Insert failed");
                Reply::line(StatusCode::OK, format!("Error: {e}"))
            }
        }
    }

    #[instrument(skip(self, params), fields(title = %params.title))]
    async fn update_record(&self, params: InventoryParams) -> Reply {
        if self.find(&params.title).await.is_none() {
            warn!("Update of unknown title");
            return Reply::line(
                StatusCode::NOT_FOUND,
                format!("(Error) Title does not exists: {}", quoted(&params.title)),
            );
        }

        let filter = TitleFilter::new(params.title.clone());
        match self.store.update_one(&filter, params.to_patch()).await {
            Ok(matched) => {
                info!(matched, price = %params.price, quantity = params.quantity, in_stock = params.in_stock, "Title updated");
                Reply::line(StatusCode::OK, "Title updated without errors ")
            }
            Err(e) => {
                error!(error = %e, "Update failed");
                Reply::line(StatusCode::OK, format!("(Error) Update request failed: {e}"))
            }
        }
    }

    /// Existence check by title. A store error counts as a miss.
    async fn find(&self, title: &str) -> Option<InventoryRecord> {
        match self.store.find_one(&TitleFilter::new(title)).await {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, "Lookup in store failed");
                None
            }
        }
    }

    fn parse(&self, query: &QueryParams) -> Result<InventoryParams, Reply> {
        let (params, issues) = InventoryParams::from_query(query);
        if issues.is_empty() {
            return Ok(params);
        }

        for issue in &issues {
            warn!(title = %params.title, %issue, "Malformed parameter");
        }

        if self.config.strict_params {
            let reasons: Vec<String> = issues.iter().map(ToString::to_string).collect();
            return Err(Reply::line(
                StatusCode::BAD_REQUEST,
                format!("Error: Bad Request: {}", reasons.join(", ")),
            ));
        }
        Ok(params)
    }
}
