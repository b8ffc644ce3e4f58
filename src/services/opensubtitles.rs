//! opensubtitles.org client.
//!
//! Resolves a movie filename to (id, title, year) via the JSON suggest
//! endpoint with an HTML full-text search fallback, and selects one
//! subtitle entry from a listing page under trust/hearing-impaired
//! preference rules. All parsing works on plain text bodies so it can be
//! exercised against fixture documents.

use crate::models::config::Config;
use crate::models::media::{MovieMetadata, SubtitleCandidate};
use crate::services::html::{self, Document};
use crate::{Error, Result};
use regex::Regex;
use serde::Deserialize;

// Structural selectors and patterns for the scraped pages.
const RESULT_ANCHOR_SELECTOR: &str = "a.bnone";
const SUBTITLE_ROW_SELECTOR: &str = "tr.change.even.expandable, tr.change.odd.expandable";
const TRUSTED_MARKER_SELECTOR: &str = r#"[title="Subtitles from trusted source"]"#;
const HEARING_IMPAIRED_MARKER_SELECTOR: &str = r#"[title="Subtitles for hearing impaired"]"#;
const DOWNLOAD_LINK_SELECTOR: &str = r#"a[href*="subtitleserve"]"#;
const MOVIE_ID_PATTERN: &str = r"idmovie-(\d+)";
const TITLE_YEAR_PATTERN: &str = r"(.+)\s+\((\d+)\)";

/// Client for the remote subtitle service.
pub struct OpenSubtitlesClient {
    host: String,
    language: String,
    trusted_only: bool,
    hearing_impaired_only: bool,
    client: reqwest::Client,
}

/// One element of the JSON suggest response.
#[derive(Debug, Deserialize)]
struct Suggestion {
    id: JsonScalar,
    name: String,
    year: JsonScalar,
}

/// The suggest endpoint is loose about number-vs-string fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonScalar {
    Number(i64),
    Text(String),
}

impl JsonScalar {
    fn into_string(self) -> String {
        match self {
            JsonScalar::Number(n) => n.to_string(),
            JsonScalar::Text(s) => s,
        }
    }
}

impl OpenSubtitlesClient {
    /// Create a new client from the run configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            host: config.host.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            trusted_only: config.trusted_only,
            hearing_impaired_only: config.hearing_impaired_only,
            client: reqwest::Client::new(),
        }
    }

    fn suggest_url(&self, filename: &str) -> String {
        format!(
            "{}/libs/suggest.php?format=json3&MovieName={}",
            self.host,
            urlencoding::encode(filename)
        )
    }

    fn fulltext_url(&self, filename: &str) -> String {
        format!(
            "{}/en/search2/sublanguageid-all/fulltextuseor-on/fixinput-on/moviename-{}",
            self.host,
            filename.replace(' ', "+")
        )
    }

    fn listing_url(&self, movie_id: &str) -> String {
        format!(
            "{}/en/search/sublanguageid-{}/idmovie-{}",
            self.host, self.language, movie_id
        )
    }

    /// Resolve a movie filename to its metadata.
    ///
    /// Tries the suggest endpoint first; any miss or failure there is
    /// logged and the full-text search fallback is attempted. `Ok(None)`
    /// means neither path found a match.
    pub async fn resolve(&self, filename: &str) -> Result<Option<MovieMetadata>> {
        match self.client.get(self.suggest_url(filename)).send().await {
            Ok(response) => match response.text().await {
                Ok(body) => match parse_suggestions(&body) {
                    Ok(Some(metadata)) => return Ok(Some(metadata)),
                    Ok(None) => {
                        tracing::info!("No suggest match for '{}', trying full text search", filename)
                    }
                    Err(e) => {
                        tracing::warn!("Malformed suggest response for '{}': {}", filename, e)
                    }
                },
                Err(e) => tracing::warn!("Suggest endpoint failed for '{}': {}", filename, e),
            },
            Err(e) => tracing::warn!("Suggest endpoint unreachable for '{}': {}", filename, e),
        }

        self.full_text_search(filename).await
    }

    /// Resolve via the HTML full-text search endpoint.
    async fn full_text_search(&self, filename: &str) -> Result<Option<MovieMetadata>> {
        let body = self
            .client
            .get(self.fulltext_url(filename))
            .send()
            .await?
            .text()
            .await?;
        parse_search_results(&body)
    }

    /// Select one subtitle candidate for a resolved movie id.
    pub async fn select_subtitle(&self, movie_id: &str) -> Result<Option<SubtitleCandidate>> {
        let body = self
            .client
            .get(self.listing_url(movie_id))
            .send()
            .await?
            .text()
            .await?;
        parse_listing(
            &body,
            &self.host,
            self.trusted_only,
            self.hearing_impaired_only,
        )
    }
}

/// Parse the suggest endpoint's JSON body.
///
/// An empty result array is `Ok(None)`; a body that is not the expected
/// JSON shape is an error, so callers can log it apart from "no match".
pub fn parse_suggestions(body: &str) -> std::result::Result<Option<MovieMetadata>, serde_json::Error> {
    let mut suggestions: Vec<Suggestion> = serde_json::from_str(body)?;
    if suggestions.is_empty() {
        return Ok(None);
    }
    let first = suggestions.remove(0);
    Ok(Some(MovieMetadata {
        id: first.id.into_string(),
        title: first.name,
        year: first.year.into_string(),
    }))
}

/// Parse the first result anchor out of a full-text search page.
pub fn parse_search_results(html_text: &str) -> Result<Option<MovieMetadata>> {
    let doc = Document::parse(html_text);
    let anchor = match doc.find_first(RESULT_ANCHOR_SELECTOR)? {
        Some(a) => a,
        None => return Ok(None),
    };
    let href = match anchor.value().attr("href") {
        Some(h) => h,
        None => return Ok(None),
    };

    let id = match pattern(MOVIE_ID_PATTERN)?.captures(href) {
        Some(caps) => caps[1].to_string(),
        None => return Ok(None),
    };

    let text = anchor.text().collect::<String>();
    match pattern(TITLE_YEAR_PATTERN)?.captures(text.trim()) {
        Some(caps) => Ok(Some(MovieMetadata {
            id,
            title: caps[1].trim().to_string(),
            year: caps[2].to_string(),
        })),
        None => Ok(None),
    }
}

/// Select one subtitle row from a listing page.
///
/// First row carrying the trusted marker wins (plus the hearing-impaired
/// marker when that filter is on). With no acceptable trusted row and
/// trusted-only disabled, the first row in document order is used instead.
pub fn parse_listing(
    html_text: &str,
    host: &str,
    trusted_only: bool,
    hearing_impaired_only: bool,
) -> Result<Option<SubtitleCandidate>> {
    let doc = Document::parse(html_text);
    let rows = doc.find_all(SUBTITLE_ROW_SELECTOR)?;
    if rows.is_empty() {
        return Ok(None);
    }

    for row in &rows {
        if html::find_first_in(row, TRUSTED_MARKER_SELECTOR)?.is_none() {
            continue;
        }
        if hearing_impaired_only
            && html::find_first_in(row, HEARING_IMPAIRED_MARKER_SELECTOR)?.is_none()
        {
            continue;
        }
        if let Some(candidate) = candidate_from_row(row, host)? {
            return Ok(Some(candidate));
        }
    }

    if !trusted_only {
        tracing::warn!("No trusted subtitles found, falling back to the first listed entry");
        return candidate_from_row(&rows[0], host);
    }

    Ok(None)
}

/// Extract the download link and uploader name from one listing row.
fn candidate_from_row(
    row: &scraper::ElementRef<'_>,
    host: &str,
) -> Result<Option<SubtitleCandidate>> {
    let link = match html::find_first_in(row, DOWNLOAD_LINK_SELECTOR)? {
        Some(l) => l,
        None => return Ok(None),
    };
    let href = match link.value().attr("href") {
        Some(h) => h,
        None => return Ok(None),
    };

    let uploader = html::find_all_in(row, "td")?
        .last()
        .and_then(|td| html::find_first_in(td, "a").ok().flatten())
        .map(|a| a.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(Some(SubtitleCandidate {
        download_url: format!("{}{}", host, href),
        uploader,
    }))
}

fn pattern(re: &str) -> Result<Regex> {
    Regex::new(re).map_err(|e| Error::other(format!("bad pattern {}: {}", re, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions_numeric_fields() {
        let body = r#"[{"id": 903, "name": "Inception", "year": 2010}]"#;
        let metadata = parse_suggestions(body).unwrap().unwrap();
        assert_eq!(metadata.id, "903");
        assert_eq!(metadata.title, "Inception");
        assert_eq!(metadata.year, "2010");
    }

    #[test]
    fn test_parse_suggestions_string_fields() {
        let body = r#"[{"id": "903", "name": "Inception", "year": "2010"}]"#;
        let metadata = parse_suggestions(body).unwrap().unwrap();
        assert_eq!(metadata.id, "903");
        assert_eq!(metadata.year, "2010");
    }

    #[test]
    fn test_parse_suggestions_empty_and_malformed() {
        assert!(parse_suggestions("[]").unwrap().is_none());
        assert!(parse_suggestions("not json").is_err());
        assert!(parse_suggestions(r#"[{"id": 1}]"#).is_err());
    }

    #[test]
    fn test_urls() {
        let config = crate::models::config::Config {
            root_dir: "/m".into(),
            temp_dir: "/tmp".into(),
            host: "https://example.org/".to_string(),
            language: "eng".to_string(),
            trusted_only: false,
            hearing_impaired_only: false,
            overwrite_existing: false,
            video_extensions: vec!["mkv".to_string()],
            min_movie_bytes: 0,
        };
        let client = OpenSubtitlesClient::new(&config);
        assert_eq!(
            client.suggest_url("The Movie"),
            "https://example.org/libs/suggest.php?format=json3&MovieName=The%20Movie"
        );
        assert_eq!(
            client.fulltext_url("The Movie"),
            "https://example.org/en/search2/sublanguageid-all/fulltextuseor-on/fixinput-on/moviename-The+Movie"
        );
        assert_eq!(
            client.listing_url("903"),
            "https://example.org/en/search/sublanguageid-eng/idmovie-903"
        );
    }
}
