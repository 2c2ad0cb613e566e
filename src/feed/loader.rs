/// Job feed loader
///
/// Loads the list of job postings from the feed and parses it into
/// typed records. The feed is either a JSON file on disk or an HTTP
/// endpoint serving the same payload.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::data::JobRecord;

/// Relative feed location the widget reads when none is configured
pub const DEFAULT_FEED: &str = "jobs.json";

/// Where the job feed lives
#[derive(Debug, Clone)]
pub enum FeedSource {
    /// A JSON file on local disk
    File(PathBuf),
    /// An HTTP(S) endpoint returning the same JSON payload
    Url(String),
}

impl FeedSource {
    /// Interpret a feed location string
    ///
    /// Anything that looks like an HTTP(S) URL is fetched over the
    /// network; everything else is treated as a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            FeedSource::Url(location.to_string())
        } else {
            FeedSource::File(PathBuf::from(location))
        }
    }
}

/// Why a feed load failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(reqwest::StatusCode),

    /// The feed file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload did not decode to a job list
    #[error("malformed job feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Load the job feed
///
/// Pure read: the caller decides where the records are stored. Any
/// transport failure, non-success status or malformed payload fails
/// the whole load; there is no partial result and no retry.
pub async fn load(source: &FeedSource) -> Result<Vec<JobRecord>, FetchError> {
    match source {
        FeedSource::File(path) => read_file(path).await,
        FeedSource::Url(url) => fetch_url(url).await,
    }
}

/// Read and parse a feed file from disk
async fn read_file(path: &Path) -> Result<Vec<JobRecord>, FetchError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FetchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Fetch and parse the feed from an HTTP endpoint
async fn fetch_url(url: &str) -> Result<Vec<JobRecord>, FetchError> {
    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.text().await?;

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD_FEED: &str = r#"[
        {
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Berlin",
            "posted_date": "2025-05-01",
            "description": "Build and run our core services.",
            "type": "Full-time"
        }
    ]"#;

    fn feed_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("failed to write test feed");
        path
    }

    #[tokio::test]
    async fn loads_a_valid_feed_file() {
        let path = feed_file("job-board-valid-feed.json", GOOD_FEED);

        let jobs = load(&FeedSource::File(path.clone()))
            .await
            .expect("feed should load");
        fs::remove_file(path).ok();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].job_type, "Full-time");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let source = FeedSource::File(PathBuf::from("/nonexistent/jobs.json"));

        let error = load(&source).await.expect_err("load should fail");

        assert!(matches!(error, FetchError::Read { .. }));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_decode_error() {
        let path = feed_file("job-board-broken-feed.json", "{ not json ]");

        let error = load(&FeedSource::File(path.clone()))
            .await
            .expect_err("load should fail");
        fs::remove_file(path).ok();

        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn a_record_missing_a_field_rejects_the_feed() {
        // "company" is absent
        let feed = r#"[
            {
                "title": "Dev",
                "location": "Remote",
                "posted_date": "2025-05-01",
                "description": "x",
                "type": "Contract"
            }
        ]"#;
        let path = feed_file("job-board-partial-feed.json", feed);

        let error = load(&FeedSource::File(path.clone()))
            .await
            .expect_err("load should fail");
        fs::remove_file(path).ok();

        assert!(matches!(error, FetchError::Decode(_)));
    }

    #[test]
    fn url_locations_go_over_http_and_the_rest_to_disk() {
        assert!(matches!(
            FeedSource::parse("https://example.com/jobs.json"),
            FeedSource::Url(_)
        ));
        assert!(matches!(
            FeedSource::parse("http://localhost:8000/jobs.json"),
            FeedSource::Url(_)
        ));
        assert!(matches!(
            FeedSource::parse("jobs.json"),
            FeedSource::File(_)
        ));
    }
}
