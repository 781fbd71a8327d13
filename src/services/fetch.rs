//! Fetch Service
//!
//! Background worker that runs Delivery API requests for the dialog.
//! Requests and responses are tagged with the controller's generation so a
//! response that arrives after a newer request can be recognised as stale.
//! A new asset request also aborts the asset fetch still in flight.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{Asset, AssetSource, Locale};
use crate::logic::errors::{classify_error, format_error_message, ErrorType};
use crate::logic::pagination::{concat_pages, request_plan, PaginationStrategy, COUNT_PROBE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    Locales,
    Assets { locale: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub kind: FetchKind,
}

/// Classified failure, cheap to clone into the model
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub kind: ErrorType,
    pub message: String,
}

impl FetchFailure {
    pub fn from_error(error: &anyhow::Error) -> Self {
        Self {
            kind: classify_error(error),
            message: format_error_message(error),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchResponse {
    Locales {
        generation: u64,
        result: Result<Vec<Locale>, FetchFailure>,
    },
    Assets {
        generation: u64,
        locale: String,
        result: Result<Vec<Asset>, FetchFailure>,
    },
}

impl FetchResponse {
    pub fn generation(&self) -> u64 {
        match self {
            FetchResponse::Locales { generation, .. } => *generation,
            FetchResponse::Assets { generation, .. } => *generation,
        }
    }
}

/// Retrieve the asset collection for `locale` using `strategy`
///
/// Full enumeration probes the total first, then fetches every page one after
/// another and concatenates them in request order. Any failed page aborts the
/// whole enumeration; a truncated collection is never returned.
pub async fn fetch_collection(
    source: &dyn AssetSource,
    strategy: PaginationStrategy,
    locale: &str,
) -> Result<Vec<Asset>> {
    match strategy {
        PaginationStrategy::SinglePage { limit } => {
            let page = source
                .assets(locale, 0, limit.max(1))
                .await
                .context("Failed to fetch assets")?;
            Ok(page.items)
        }
        PaginationStrategy::FullEnumeration { server_page_size } => {
            let probe = source
                .assets(locale, 0, COUNT_PROBE_LIMIT)
                .await
                .context("Failed to count assets")?;

            let plan = request_plan(probe.total, server_page_size);
            tracing::debug!(
                locale,
                total = probe.total,
                pages = plan.len(),
                "Enumerating asset collection"
            );

            let mut pages = Vec::with_capacity(plan.len());
            for (index, request) in plan.iter().enumerate() {
                let page = source
                    .assets(locale, request.skip, request.limit)
                    .await
                    .with_context(|| {
                        format!("Failed to fetch asset page {} of {}", index + 1, plan.len())
                    })?;
                pages.push(page.items);
            }

            Ok(concat_pages(pages))
        }
    }
}

async fn execute_request(
    source: &dyn AssetSource,
    strategy: PaginationStrategy,
    request: FetchRequest,
) -> FetchResponse {
    let generation = request.generation;
    match request.kind {
        FetchKind::Locales => {
            let result = source.locales().await.context("Failed to fetch locales");
            if let Err(e) = &result {
                tracing::warn!(generation, "Locale fetch failed: {:#}", e);
            }
            FetchResponse::Locales {
                generation,
                result: result.map_err(|e| FetchFailure::from_error(&e)),
            }
        }
        FetchKind::Assets { locale } => {
            let result = fetch_collection(source, strategy, &locale).await;
            match &result {
                Ok(assets) => tracing::debug!(generation, %locale, count = assets.len(), "Assets fetched"),
                Err(e) => tracing::warn!(generation, %locale, "Asset fetch failed: {:#}", e),
            }
            FetchResponse::Assets {
                generation,
                locale,
                result: result.map_err(|e| FetchFailure::from_error(&e)),
            }
        }
    }
}

/// Spawn the fetch service worker
pub fn spawn_fetch_service(
    source: Arc<dyn AssetSource>,
    strategy: PaginationStrategy,
) -> (mpsc::UnboundedSender<FetchRequest>, mpsc::UnboundedReceiver<FetchResponse>) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<FetchResponse>();

    tokio::spawn(async move {
        let mut assets_in_flight: Option<JoinHandle<()>> = None;

        while let Some(request) = request_rx.recv().await {
            tracing::debug!(generation = request.generation, kind = ?request.kind, "Fetch request");

            let is_assets = matches!(request.kind, FetchKind::Assets { .. });
            if is_assets {
                if let Some(handle) = assets_in_flight.take() {
                    if !handle.is_finished() {
                        tracing::debug!("Cancelling superseded asset fetch");
                        handle.abort();
                    }
                }
            }

            let source = Arc::clone(&source);
            let response_tx = response_tx.clone();
            let handle = tokio::spawn(async move {
                let response = execute_request(source.as_ref(), strategy, request).await;
                let _ = response_tx.send(response);
            });

            if is_assets {
                assets_in_flight = Some(handle);
            }
        }
    });

    (request_tx, response_rx)
}
