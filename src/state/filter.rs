/// Search filter over the full job list
///
/// The filter derives a transient subsequence of the stored job list;
/// it never touches the list itself, so every search starts from the
/// complete feed again.

use super::data::JobRecord;

/// Select the jobs matching both search inputs
///
/// A job matches when the title query is a case-insensitive substring
/// of its title or its company, and the location query is a
/// case-insensitive substring of its location. An empty query matches
/// everything. Matching jobs keep their feed order.
pub fn filter_jobs(
    all_jobs: &[JobRecord],
    title_query: &str,
    location_query: &str,
) -> Vec<JobRecord> {
    let title_query = title_query.to_lowercase();
    let location_query = location_query.to_lowercase();

    all_jobs
        .iter()
        .filter(|job| {
            let matches_title = job.title.to_lowercase().contains(&title_query)
                || job.company.to_lowercase().contains(&title_query);
            let matches_location = job.location.to_lowercase().contains(&location_query);

            matches_title && matches_location
        })
        .cloned()
        .collect()
}
