/// State management module
///
/// This module holds the data model that flows between the feed
/// loader and the UI:
/// - Job records as parsed from the feed (data.rs)
/// - The search filter over the full job list (filter.rs)

pub mod data;
pub mod filter;
