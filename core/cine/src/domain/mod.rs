//! cine 固有のドメイン型（型と不変条件）

pub mod command;
pub mod config;
pub mod error;
pub mod movie;
pub mod movie_card;
pub mod search_history;
pub mod search_state;
pub mod search_term;
pub mod ui_action;

pub use command::CineCommand;
pub use config::CineConfig;
pub use error::{FetchError, SearchError};
pub use movie::{Detail, MovieRecord};
pub use movie_card::MovieCard;
pub use search_history::{SearchHistory, HISTORY_LIMIT};
pub use search_state::SearchState;
pub use search_term::SearchTerm;
pub use ui_action::UiAction;
