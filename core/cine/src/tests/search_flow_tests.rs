use crate::adapter::{MemoryKeyValueStore, RecordingView, StubMetadataClient, ViewCall};
use crate::domain::{Detail, FetchError, MovieRecord, SearchError, SearchState};
use crate::usecase::history_store::{HistoryStore, HISTORY_KEY};
use crate::usecase::search_controller::{SearchController, SearchDeps, SubmitOutcome};
use common::adapter::NoopLog;
use common::ports::outbound::Log;
use std::sync::Arc;

const PLACEHOLDER: &str = "https://via.placeholder.com/300x450/1a1a1a/ffffff?text=No+Poster+Available";

struct Fixture {
    controller: SearchController,
    view: RecordingView,
    client: Arc<StubMetadataClient>,
    kv: Arc<MemoryKeyValueStore>,
}

fn fixture_with(client: StubMetadataClient, kv: MemoryKeyValueStore) -> Fixture {
    let client = Arc::new(client);
    let kv = Arc::new(kv);
    let log: Arc<dyn Log> = Arc::new(NoopLog);
    let view = RecordingView::new();
    let deps = SearchDeps {
        client: client.clone(),
        history: Arc::new(HistoryStore::new(kv.clone(), Arc::clone(&log))),
        log,
        placeholder_poster: PLACEHOLDER.to_string(),
    };
    Fixture {
        controller: SearchController::new(deps, Box::new(view.clone())),
        view,
        client,
        kv,
    }
}

fn fixture(client: StubMetadataClient) -> Fixture {
    fixture_with(client, MemoryKeyValueStore::new())
}

fn inception() -> MovieRecord {
    MovieRecord {
        title: "Inception".to_string(),
        year: Detail::Known("2010".to_string()),
        runtime: Detail::Known("148 min".to_string()),
        genre: Detail::Known("Action, Adventure, Sci-Fi".to_string()),
        plot: Detail::Known("A thief who steals corporate secrets.".to_string()),
        director: Detail::Known("Christopher Nolan".to_string()),
        actors: Detail::Known("Leonardo DiCaprio".to_string()),
        poster_url: None,
        rating: Some("8.8".to_string()),
    }
}

#[test]
fn test_inception_shows_placeholder_and_rating() {
    let mut f = fixture(StubMetadataClient::new().with("Inception", Ok(inception())));
    f.controller.start();
    f.controller.set_input("Inception");

    let outcome = f.controller.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Found {
            title: "Inception".to_string()
        }
    );

    let card = f
        .view
        .calls()
        .into_iter()
        .find_map(|c| match c {
            ViewCall::RenderMovie(card) => Some(card),
            _ => None,
        })
        .expect("movie rendered");
    assert_eq!(card.title, "Inception");
    assert_eq!(card.poster_url, PLACEHOLDER);
    assert_eq!(card.rating.as_deref(), Some("8.8"));
    assert!(matches!(f.controller.state(), SearchState::Showing(c) if c == &card));
    assert!(f.view.calls().contains(&ViewCall::SetMovieVisible(true)));
}

#[test]
fn test_not_found_shows_provider_message() {
    let mut f = fixture(StubMetadataClient::new().with(
        "zzzzzznotamovie",
        Err(FetchError::not_found(Some("Movie not found!".to_string()))),
    ));
    f.controller.set_input("zzzzzznotamovie");

    let outcome = f.controller.submit();
    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(SearchError::Fetch(FetchError::NotFound { .. }))
    ));
    assert_eq!(f.view.last_error(), Some(Some("Movie not found!".to_string())));
    assert_eq!(f.view.calls().last(), Some(&ViewCall::SetLoading(false)));
    assert!(!f.view.calls().iter().any(|c| matches!(c, ViewCall::RenderMovie(_))));
    assert!(f.controller.history().is_empty());
}

#[test]
fn test_whitespace_query_never_calls_client() {
    let mut f = fixture(StubMetadataClient::new().with_title("Heat"));
    f.controller.set_input("   ");
    f.view.take();

    let outcome = f.controller.submit();
    assert_eq!(outcome, SubmitOutcome::Failed(SearchError::EmptyQuery));
    assert!(f.client.requested().is_empty());
    assert_eq!(f.view.last_error(), Some(Some("Please enter a movie title".to_string())));
    assert!(!f.view.calls().contains(&ViewCall::SetLoading(true)));
}

#[test]
fn test_validation_error_hides_previous_card() {
    let mut f = fixture(StubMetadataClient::new().with_title("Heat"));
    f.controller.set_input("Heat");
    f.controller.submit();
    f.view.take();

    f.controller.set_input("");
    f.controller.submit();
    assert!(f.view.calls().contains(&ViewCall::SetMovieVisible(false)));
    assert_eq!(
        f.controller.state(),
        &SearchState::Failed {
            message: "Please enter a movie title".to_string()
        }
    );
}

#[test]
fn test_title_is_trimmed_before_fetch_and_record() {
    let mut f = fixture(StubMetadataClient::new().with_title("Up"));
    f.controller.set_input("  Up  ");
    f.controller.submit();
    assert_eq!(f.client.requested(), vec!["Up".to_string()]);
    assert_eq!(f.kv.raw(HISTORY_KEY).as_deref(), Some("[\"Up\"]"));
}

#[test]
fn test_new_search_clears_previous_error() {
    let mut f = fixture(StubMetadataClient::new().with_title("Heat"));
    f.controller.set_input("nothing");
    f.controller.submit();
    assert!(matches!(f.controller.state(), SearchState::Failed { .. }));

    f.controller.set_input("Heat");
    f.controller.submit();
    assert_eq!(f.view.last_error(), Some(None));
    assert!(matches!(f.controller.state(), SearchState::Showing(_)));
}

#[test]
fn test_start_renders_saved_history() {
    let mut f = fixture_with(
        StubMetadataClient::new(),
        MemoryKeyValueStore::with_value(HISTORY_KEY, "[\"Alien\",\"Heat\"]"),
    );
    f.controller.start();
    assert_eq!(
        f.view.last_history(),
        Some(vec!["Alien".to_string(), "Heat".to_string()])
    );
}

#[test]
fn test_select_history_searches_entry() {
    let mut f = fixture_with(
        StubMetadataClient::new().with_title("Heat"),
        MemoryKeyValueStore::with_value(HISTORY_KEY, "[\"Alien\",\"Heat\"]"),
    );
    f.controller.start();

    let outcome = f.controller.select_history(2);
    assert_eq!(
        outcome,
        Some(SubmitOutcome::Found {
            title: "Heat".to_string()
        })
    );
    assert_eq!(f.controller.input(), "Heat");
    assert_eq!(
        f.view.last_history(),
        Some(vec!["Heat".to_string(), "Alien".to_string()])
    );
}
