use crate::adapter::{MemoryKeyValueStore, RecordingView, StubMetadataClient, ViewCall};
use crate::ports::outbound::InputSource;
use crate::usecase::history_store::HistoryStore;
use crate::usecase::search_controller::{SearchController, SearchDeps};
use crate::usecase::session::{InteractiveSession, HELP, PROMPT};
use common::adapter::NoopLog;
use common::error::Error;
use common::ports::outbound::Log;
use std::collections::VecDeque;
use std::sync::Arc;

/// 決まった行を順に返し、尽きたら入力終端
struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        assert_eq!(prompt, PROMPT);
        Ok(self.lines.pop_front())
    }
}

fn session(
    client: StubMetadataClient,
    lines: &[&str],
) -> (InteractiveSession, RecordingView, Arc<StubMetadataClient>) {
    let client = Arc::new(client);
    let log: Arc<dyn Log> = Arc::new(NoopLog);
    let view = RecordingView::new();
    let deps = SearchDeps {
        client: client.clone(),
        history: Arc::new(HistoryStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::clone(&log),
        )),
        log,
        placeholder_poster: "placeholder".to_string(),
    };
    let controller = SearchController::new(deps, Box::new(view.clone()));
    (
        InteractiveSession::new(controller, Box::new(ScriptedInput::new(lines))),
        view,
        client,
    )
}

#[test]
fn test_session_ends_on_eof() {
    let (mut s, view, _) = session(StubMetadataClient::new(), &[]);
    assert_eq!(s.run().unwrap(), 0);
    // 起動時に空の履歴を描画する
    assert_eq!(view.calls().first(), Some(&ViewCall::RenderHistory(vec![])));
}

#[test]
fn test_session_searches_and_quits() {
    let (mut s, _, client) = session(
        StubMetadataClient::new().with_title("Heat").with_title("Up"),
        &["Heat", "Up", ":q", "never read"],
    );
    assert_eq!(s.run().unwrap(), 0);
    assert_eq!(client.requested(), vec!["Heat".to_string(), "Up".to_string()]);
    assert_eq!(s.controller().history().entries(), &["Up", "Heat"]);
}

#[test]
fn test_session_select_history_by_number() {
    let (mut s, _, client) = session(
        StubMetadataClient::new().with_title("Heat").with_title("Up"),
        &["Heat", "Up", ":2"],
    );
    s.run().unwrap();
    assert_eq!(
        client.requested(),
        vec!["Heat".to_string(), "Up".to_string(), "Heat".to_string()]
    );
    assert_eq!(s.controller().history().entries(), &["Heat", "Up"]);
}

#[test]
fn test_session_blank_line_shows_validation_error() {
    let (mut s, view, client) = session(StubMetadataClient::new(), &["   "]);
    s.run().unwrap();
    assert!(client.requested().is_empty());
    assert_eq!(view.last_error(), Some(Some("Please enter a movie title".to_string())));
}

#[test]
fn test_session_clear_help_and_unknown() {
    let (mut s, view, _) = session(
        StubMetadataClient::new(),
        &["Heat", ":clear", ":help", ":bogus", "!9", ":history"],
    );
    s.run().unwrap();
    let calls = view.calls();
    assert!(calls.contains(&ViewCall::FocusInput));
    assert!(calls.contains(&ViewCall::Notice(HELP.to_string())));
    assert!(calls.contains(&ViewCall::Notice(
        "Unknown command: :bogus (type :help)".to_string()
    )));
    assert!(calls.contains(&ViewCall::Notice("No recent search #9.".to_string())));
    assert!(calls.contains(&ViewCall::Notice("No recent searches.".to_string())));
    assert_eq!(s.controller().input(), "");
}
