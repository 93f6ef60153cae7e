//! OMDb API への問い合わせ（MovieMetadataClient 実装）
//!
//! `GET <endpoint>?apikey=<key>&t=<title>` を 1 回だけ送る。タイトルの URL エンコードは
//! reqwest のクエリシリアライザに任せる。

use crate::domain::movie::known_value;
use crate::domain::{Detail, FetchError, MovieRecord, SearchTerm};
use crate::ports::outbound::MovieMetadataClient;
use common::error::Error;
use serde::Deserialize;
use std::time::Duration;

/// OMDb の応答ボディ（使う項目だけ）
#[derive(Debug, Deserialize)]
struct OmdbPayload {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

/// 2xx 応答のボディを MovieRecord に写す
///
/// `Response` が "False" なら NotFound。解釈できないボディは Network 扱い。
pub fn parse_movie_response(body: &str) -> Result<MovieRecord, FetchError> {
    let payload: OmdbPayload = serde_json::from_str(body)
        .map_err(|e| FetchError::network(format!("Failed to parse response JSON: {}", e)))?;

    if payload.response.as_deref() == Some("False") {
        return Err(FetchError::not_found(payload.error));
    }

    Ok(MovieRecord {
        // Title は "N/A" を含めプロバイダの値をそのまま使う
        title: payload.title.unwrap_or_default(),
        year: Detail::from_provider(payload.year),
        runtime: Detail::from_provider(payload.runtime),
        genre: Detail::from_provider(payload.genre),
        plot: Detail::from_provider(payload.plot),
        director: Detail::from_provider(payload.director),
        actors: Detail::from_provider(payload.actors),
        poster_url: known_value(payload.poster),
        rating: known_value(payload.imdb_rating),
    })
}

pub struct OmdbClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        // 応答が返るまで待つ（reqwest::blocking の既定 30 秒は使わない）
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

impl MovieMetadataClient for OmdbClient {
    fn fetch(&self, title: &SearchTerm) -> Result<MovieRecord, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("apikey", self.api_key.as_str()), ("t", title.as_ref())])
            .send()
            .map_err(|e| FetchError::network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::network(format!("Failed to read response: {}", e)))?;
        parse_movie_response(&body)
    }
}
