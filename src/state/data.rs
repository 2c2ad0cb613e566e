/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the feed loader and the UI layer.

use serde::{Deserialize, Serialize};

/// Represents a single job posting from the feed
///
/// Every field is required: a feed record missing any of them is
/// rejected when the feed is parsed. All values are display strings;
/// `title`, `company` and `location` are also what the search looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Position name (e.g., "Backend Engineer")
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Free-form location (e.g., "Berlin" or "Remote")
    pub location: String,
    /// Posting date as published in the feed, shown verbatim
    pub posted_date: String,
    /// Full description; the UI shows a truncated snippet
    pub description: String,
    /// Free-form category label (e.g., "Full-time")
    #[serde(rename = "type")]
    pub job_type: String,
}
