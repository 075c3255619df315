//! Search pages served through the response cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use podcast_directory::domain::ports::{
    PodcastSearch, SearchRepository, SearchRepositoryError,
};
use podcast_directory::domain::{
    Episode, OrderBy, Podcast, SearchQuery, SearchRequest, SearchService, SearchTarget,
};
use rstest::rstest;

mod support;

use support::{memory_cache, podcast};

/// Catalogue search that records the queries it receives.
#[derive(Default)]
struct CountingSearchRepository {
    calls: AtomicUsize,
    last_query: std::sync::Mutex<Option<SearchQuery>>,
}

impl CountingSearchRepository {
    fn record(&self, query: &SearchQuery) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().expect("query mutex") = Some(query.clone());
    }
}

#[async_trait]
impl SearchRepository for CountingSearchRepository {
    async fn search_podcasts(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<Podcast>, SearchRepositoryError> {
        self.record(query);
        Ok(vec![podcast(1, 1), podcast(2, 0)])
    }

    async fn search_episodes(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<Episode>, SearchRepositoryError> {
        self.record(query);
        Ok(podcast(7, 3).episodes)
    }
}

#[rstest]
#[tokio::test]
async fn identical_requests_hit_the_repository_once() {
    let repo = Arc::new(CountingSearchRepository::default());
    let service = SearchService::new(repo.clone(), memory_cache());
    let request = SearchRequest {
        query_text: Some("jazz".to_owned()),
        ..SearchRequest::default()
    };

    let first = service.search(request.clone()).await.expect("search");
    let second = service.search(request).await.expect("search");

    assert_eq!(first, second);
    assert_eq!(first.results.len(), 3);
    assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn different_pages_are_cached_separately() {
    let repo = Arc::new(CountingSearchRepository::default());
    let service = SearchService::new(repo.clone(), memory_cache());

    for current_page in [1, 2, 1, 2] {
        let request = SearchRequest {
            current_page,
            search_target: SearchTarget::Podcasts,
            ..SearchRequest::default()
        };
        let page = service.search(request).await.expect("search");
        assert_eq!(page.current_page, current_page);
    }

    assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    let last = repo
        .last_query
        .lock()
        .expect("query mutex")
        .clone()
        .expect("query recorded");
    assert_eq!(last.offset, 10);
    assert_eq!(last.order_by, Some(OrderBy::PublicationDate));
}

#[rstest]
#[tokio::test]
async fn podcast_hits_link_to_slug_pages() {
    let service = SearchService::new(
        Arc::new(CountingSearchRepository::default()),
        memory_cache(),
    );
    let request = SearchRequest {
        search_target: SearchTarget::Podcasts,
        ..SearchRequest::default()
    };

    let page = service.search(request).await.expect("search");

    let links: Vec<&str> = page.results.iter().map(|hit| hit.relative_link()).collect();
    assert_eq!(links, vec!["/podcasts/1/cast-1", "/podcasts/2/cast-2"]);
}
