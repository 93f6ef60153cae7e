//! 映画レコードを表示項目へ射影した結果（表示文言の置き換えはここで完結する）

use super::movie::MovieRecord;

pub const UNKNOWN_YEAR: &str = "Year unknown";
pub const UNKNOWN_RUNTIME: &str = "Runtime unknown";
pub const UNKNOWN_GENRE: &str = "Genre unknown";
pub const UNKNOWN_PLOT: &str = "Plot information not available.";
pub const UNKNOWN_PERSON: &str = "Not available";

/// 画面の映画カードに並ぶ項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub poster_url: String,
    pub poster_alt: String,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    /// None なら評価バッジを出さない
    pub rating: Option<String>,
}

impl MovieCard {
    /// レコードを表示項目に写す。ポスターが無ければ placeholder_poster を使う。
    pub fn project(record: &MovieRecord, placeholder_poster: &str) -> Self {
        Self {
            poster_url: record
                .poster_url
                .clone()
                .unwrap_or_else(|| placeholder_poster.to_string()),
            poster_alt: format!("{} Poster", record.title),
            title: record.title.clone(),
            year: record.year.or_marker(UNKNOWN_YEAR).to_string(),
            runtime: record.runtime.or_marker(UNKNOWN_RUNTIME).to_string(),
            genre: record.genre.or_marker(UNKNOWN_GENRE).to_string(),
            plot: record.plot.or_marker(UNKNOWN_PLOT).to_string(),
            director: record.director.or_marker(UNKNOWN_PERSON).to_string(),
            actors: record.actors.or_marker(UNKNOWN_PERSON).to_string(),
            rating: record.rating.clone(),
        }
    }
}
