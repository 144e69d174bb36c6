use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::catalog::{CatalogClient, CatalogError, Product};
use crate::config::Config;
use crate::filter::FilterSet;
use crate::paging::Pager;

/// State transition to apply when a fetch cycle completes.
#[derive(Debug)]
enum FetchCommit {
    /// Newest cycle succeeded: replace the product window.
    Products(Vec<Product>),
    /// Newest cycle failed: raise the fetch-failed flag.
    Failed(CatalogError),
    /// A newer cycle was issued while this one was in flight; its outcome
    /// is discarded without touching state, success or failure.
    Stale,
}

/// Decide what a completing fetch cycle may commit. `ticket` is the ticket
/// the cycle was issued with, `latest` the most recently issued one.
fn commit_for(
    ticket: u64,
    latest: u64,
    outcome: Result<Vec<Product>, CatalogError>,
) -> FetchCommit {
    if ticket != latest {
        return FetchCommit::Stale;
    }
    match outcome {
        Ok(items) => FetchCommit::Products(items),
        Err(e) => FetchCommit::Failed(e),
    }
}

/// Shared browse state: the fetched product window, the page cursor, the
/// three filter inputs, and the fetch status flags.
///
/// All mutation goes through the methods below; components read the signals
/// and re-render reactively.
#[derive(Clone)]
pub struct BrowseContext {
    pub client: CatalogClient,
    pub pager: Signal<Pager>,
    pub products: Signal<Vec<Product>>,
    pub name_filter: Signal<String>,
    pub price_filter: Signal<String>,
    pub brand_filter: Signal<String>,
    pub is_loading: Signal<bool>,
    pub fetch_failed: Signal<bool>,
    /// Ticket of the most recently issued fetch. A completion holding an
    /// older ticket is stale (a newer page request superseded it) and its
    /// outcome is discarded without touching state.
    latest_fetch: Signal<u64>,
}

impl BrowseContext {
    /// Start a fetch cycle for the current page: identifier window, then
    /// product records. Issuing a new cycle supersedes any cycle still in
    /// flight; only the newest cycle may commit its outcome.
    pub fn load_page(&mut self) {
        let client = self.client.clone();
        let pager = *self.pager.read();

        let ticket = *self.latest_fetch.peek() + 1;
        self.latest_fetch.set(ticket);

        let mut products = self.products.clone();
        let mut is_loading = self.is_loading.clone();
        let mut fetch_failed = self.fetch_failed.clone();
        let latest_fetch = self.latest_fetch.clone();

        spawn(async move {
            is_loading.set(true);
            fetch_failed.set(false);

            let outcome = client.fetch_page(&pager).await;

            match commit_for(ticket, *latest_fetch.peek(), outcome) {
                FetchCommit::Stale => {
                    debug!("Dropping stale fetch result for page {}", pager.page());
                    return;
                }
                FetchCommit::Products(items) => {
                    debug!("Fetched {} products for page {}", items.len(), pager.page());
                    products.set(items);
                }
                FetchCommit::Failed(e) => {
                    warn!("Catalog fetch failed for page {}: {}", pager.page(), e);
                    fetch_failed.set(true);
                }
            }

            is_loading.set(false);
        });
    }

    pub fn next_page(&mut self) {
        self.pager.with_mut(|p| p.next());
    }

    pub fn prev_page(&mut self) {
        self.pager.with_mut(|p| p.prev());
    }

    pub fn set_name_filter(&mut self, value: String) {
        self.name_filter.set(value);
    }

    pub fn set_price_filter(&mut self, value: String) {
        self.price_filter.set(value);
    }

    pub fn set_brand_filter(&mut self, value: String) {
        self.brand_filter.set(value);
    }

    /// The filtered view, derived fresh from the fetched window and the
    /// current filter strings. Order of the window is preserved.
    pub fn filtered_products(&self) -> Vec<Product> {
        let filters = FilterSet {
            name: self.name_filter.read().clone(),
            price: self.price_filter.read().clone(),
            brand: self.brand_filter.read().clone(),
        };
        filters.apply(&self.products.read())
    }
}

/// Provider component to make browse state available throughout the app
#[component]
pub fn BrowseContextProvider(children: Element) -> Element {
    let config = use_hook(Config::load);
    let client = use_hook(|| CatalogClient::new(&config));
    let page_size = config.page_size;

    let browse_ctx = BrowseContext {
        client,
        pager: use_signal(move || Pager::new(page_size)),
        products: use_signal(Vec::new),
        name_filter: use_signal(String::new),
        price_filter: use_signal(String::new),
        brand_filter: use_signal(String::new),
        is_loading: use_signal(|| false),
        fetch_failed: use_signal(|| false),
        latest_fetch: use_signal(|| 0),
    };

    use_context_provider(move || browse_ctx.clone());

    rsx! {
        {children}
    }
}
