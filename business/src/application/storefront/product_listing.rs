use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::browse::{
    BrowseProductsParams, BrowseProductsUseCase, ProductListing,
};
use crate::domain::shared::pagination::clamp_page;
use crate::domain::shared::view_state::{ViewPhase, ViewState};

struct ListingState {
    search: String,
    current_page: u32,
    total_pages: u32,
    view: ViewState<ProductListing>,
}

/// One open product-list screen: search text, page number and the last
/// fetched listing.
///
/// Overlapping fetches are allowed; only the most recently started one may
/// update the screen.
///
/// The REST API is stateless and does not use this type. It is the entry
/// point for screen clients that embed the `business` crate and keep one
/// session per open product list.
pub struct ProductListingSession {
    browse: Arc<dyn BrowseProductsUseCase>,
    logger: Arc<dyn Logger>,
    page_size: u32,
    state: Mutex<ListingState>,
}

impl ProductListingSession {
    pub fn new(
        browse: Arc<dyn BrowseProductsUseCase>,
        logger: Arc<dyn Logger>,
        page_size: u32,
    ) -> Self {
        Self {
            browse,
            logger,
            page_size,
            state: Mutex::new(ListingState {
                search: String::new(),
                current_page: 1,
                total_pages: 0,
                view: ViewState::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListingState> {
        // The state is always left consistent, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Initial fetch when the screen opens.
    pub async fn load(&self) -> bool {
        self.refetch().await
    }

    /// Stores the search text and starts again from the first page.
    pub async fn submit_search(&self, text: &str) -> bool {
        {
            let mut state = self.state();
            state.search = text.to_string();
            state.current_page = 1;
        }
        self.refetch().await
    }

    /// Moves to `requested`, clamped into the pages known from the last fetch.
    pub async fn go_to_page(&self, requested: i64) -> bool {
        {
            let mut state = self.state();
            state.current_page = clamp_page(requested, state.total_pages);
        }
        self.refetch().await
    }

    pub async fn next_page(&self) -> bool {
        let current = i64::from(self.current_page());
        self.go_to_page(current + 1).await
    }

    pub async fn previous_page(&self) -> bool {
        let current = i64::from(self.current_page());
        self.go_to_page(current - 1).await
    }

    pub fn current_page(&self) -> u32 {
        self.state().current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.state().total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.state().current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        let state = self.state();
        state.current_page < state.total_pages
    }

    pub fn listing(&self) -> Option<ProductListing> {
        self.state().view.data().cloned()
    }

    pub fn phase(&self) -> ViewPhase {
        self.state().view.phase(|listing| listing.products.is_empty())
    }

    /// Runs one fetch for the current search and page. Returns whether the
    /// result was applied; `false` means a newer fetch superseded it.
    async fn refetch(&self) -> bool {
        let (ticket, params) = {
            let mut state = self.state();
            let ticket = state.view.begin();
            let params = BrowseProductsParams {
                search: Some(state.search.clone()),
                page: i64::from(state.current_page),
                page_size: self.page_size,
            };
            (ticket, params)
        };

        let result = self.browse.execute(params).await;

        let mut state = self.state();
        if !state.view.is_current(ticket) {
            self.logger.debug(&format!(
                "Discarding stale listing response (generation {})",
                ticket.generation()
            ));
            return false;
        }

        match result {
            Ok(listing) => {
                state.current_page = listing.current_page;
                state.total_pages = listing.total_pages;
                state.view.resolve(ticket, Ok(listing))
            }
            Err(e) => {
                self.logger.warn(&format!("Listing fetch failed: {}", e));
                state.view.resolve(ticket, Err(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::errors::ProductError;
    use crate::domain::product::model::{NewProductProps, Product};
    use crate::domain::product::use_cases::browse::ListingMode;
    use crate::domain::product::value_objects::{ProductStatus, Sku};
    use crate::domain::shared::pagination::{Paged, SearchCriteria};
    use async_trait::async_trait;
    use mockall::mock;
    use tokio::sync::Notify;

    mock! {
        pub Browse {}

        #[async_trait]
        impl BrowseProductsUseCase for Browse {
            async fn execute(&self, params: BrowseProductsParams) -> Result<ProductListing, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(sku: &str) -> Product {
        Product::new(NewProductProps {
            id: 1,
            sku: Sku::parse(sku).unwrap(),
            name: sku.to_string(),
            price: 10.0,
            status: ProductStatus::ENABLED,
            type_id: None,
            image: None,
            description: None,
            short_description: None,
        })
    }

    fn listing_for(params: &BrowseProductsParams, total_count: u64) -> ProductListing {
        let query = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());
        let (mode, current_page) = match query {
            Some(q) => (
                ListingMode::Search {
                    query: q.to_string(),
                },
                1,
            ),
            None => (ListingMode::Browse, params.page.max(1) as u32),
        };
        ProductListing::new(
            Paged::new(
                vec![product("COF-001")],
                total_count,
                SearchCriteria::page(params.page_size, current_page),
            ),
            mode,
            current_page,
            params.page_size,
        )
    }

    #[tokio::test]
    async fn should_be_ready_after_initial_load() {
        let mut browse = MockBrowse::new();
        browse
            .expect_execute()
            .times(1)
            .returning(|p| Ok(listing_for(&p, 25)));

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        assert_eq!(session.phase(), ViewPhase::Loading);

        assert!(session.load().await);

        assert_eq!(session.phase(), ViewPhase::Ready);
        assert_eq!(session.total_pages(), 3);
        assert!(!session.can_go_previous());
        assert!(session.can_go_next());
    }

    #[tokio::test]
    async fn should_clamp_requested_page_into_known_range() {
        let mut browse = MockBrowse::new();
        browse
            .expect_execute()
            .returning(|p| Ok(listing_for(&p, 25)));

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.load().await;

        session.go_to_page(4).await;
        assert_eq!(session.current_page(), 3);
        assert!(!session.can_go_next());

        session.go_to_page(0).await;
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn should_step_between_pages() {
        let mut browse = MockBrowse::new();
        browse
            .expect_execute()
            .returning(|p| Ok(listing_for(&p, 25)));

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.load().await;

        session.next_page().await;
        assert_eq!(session.current_page(), 2);
        session.previous_page().await;
        session.previous_page().await;
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn should_reset_to_first_page_when_search_is_submitted() {
        let mut browse = MockBrowse::new();
        browse
            .expect_execute()
            .returning(|p| Ok(listing_for(&p, 25)));

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.load().await;
        session.go_to_page(3).await;

        session.submit_search("house").await;

        assert_eq!(session.current_page(), 1);
        let listing = session.listing().unwrap();
        assert_eq!(
            listing.mode,
            ListingMode::Search {
                query: "house".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_stay_on_single_search_page_when_total_exceeds_page_size() {
        let mut browse = MockBrowse::new();
        browse
            .expect_execute()
            .returning(|p| Ok(listing_for(&p, 30)));

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.submit_search("house").await;

        assert_eq!(session.current_page(), 1);
        assert_eq!(session.total_pages(), 1);
        assert!(!session.can_go_next());
        assert!(!session.listing().unwrap().has_next());

        session.next_page().await;
        assert_eq!(session.current_page(), 1);
        assert!(!session.can_go_next());
    }

    #[tokio::test]
    async fn should_show_error_and_clear_items_when_fetch_fails() {
        let mut browse = MockBrowse::new();
        browse.expect_execute().returning(|_| {
            Err(ProductError::Gateway(GatewayError::status(
                502,
                "Bad Gateway",
            )))
        });

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.load().await;

        assert_eq!(
            session.phase(),
            ViewPhase::Failed("API Error: 502 Bad Gateway".to_string())
        );
        assert!(session.listing().is_none());
    }

    #[tokio::test]
    async fn should_show_empty_phase_when_no_products_match() {
        let mut browse = MockBrowse::new();
        browse.expect_execute().returning(|p| {
            let mut listing = listing_for(&p, 0);
            listing.products.items.clear();
            Ok(listing)
        });

        let session = ProductListingSession::new(Arc::new(browse), mock_logger(), 12);
        session.load().await;

        assert_eq!(session.phase(), ViewPhase::Empty);
    }

    /// Answers the first call only after the second one has completed.
    struct SlowFirstBrowse {
        first_started: Notify,
        release_first: Notify,
    }

    #[async_trait]
    impl BrowseProductsUseCase for SlowFirstBrowse {
        async fn execute(
            &self,
            params: BrowseProductsParams,
        ) -> Result<ProductListing, ProductError> {
            let is_search = params
                .search
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty());
            if !is_search {
                self.first_started.notify_one();
                self.release_first.notified().await;
                return Ok(listing_for(&params, 100));
            }
            Ok(listing_for(&params, 1))
        }
    }

    #[tokio::test]
    async fn should_discard_slow_response_when_newer_fetch_completed() {
        let browse = Arc::new(SlowFirstBrowse {
            first_started: Notify::new(),
            release_first: Notify::new(),
        });
        let session = Arc::new(ProductListingSession::new(
            browse.clone(),
            mock_logger(),
            12,
        ));

        let slow = tokio::spawn({
            let session = session.clone();
            async move { session.load().await }
        });
        browse.first_started.notified().await;

        assert!(session.submit_search("house").await);
        browse.release_first.notify_one();
        let slow_applied = slow.await.unwrap();

        assert!(!slow_applied);
        let listing = session.listing().unwrap();
        assert_eq!(listing.products.total_count, 1);
        assert_eq!(session.total_pages(), 1);
    }
}
