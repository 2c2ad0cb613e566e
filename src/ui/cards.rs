/// Job card grid
///
/// Turns job records into a display model and renders it as a wrapping
/// grid of cards. The grid owns its whole region: every call rebuilds
/// the full contents, so stale cards can never linger.

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::JobRecord;
use crate::Message;

/// Longest description shown on a card before it is cut off
const SNIPPET_LIMIT: usize = 120;

/// Width of a single card in the grid
const CARD_WIDTH: f32 = 320.0;

/// Display model for one job card
#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted: String,
    pub snippet: String,
    pub job_type: String,
}

/// Build the display models for a list of job records, in order
pub fn to_cards(jobs: &[JobRecord]) -> Vec<JobCard> {
    jobs.iter()
        .map(|job| JobCard {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posted: job.posted_date.clone(),
            snippet: snippet(&job.description),
            job_type: job.job_type.clone(),
        })
        .collect()
}

/// Cut a description down to card size
///
/// Descriptions longer than the limit show their first 120 characters
/// followed by an ellipsis; shorter ones pass through unmodified. The
/// cut counts characters, not bytes, so it never splits a multi-byte
/// character.
pub fn snippet(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(SNIPPET_LIMIT).collect();

    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// The card grid, or the fixed message when nothing matched
pub fn grid(cards: &[JobCard]) -> Element<'_, Message> {
    if cards.is_empty() {
        return text("No job listings match your criteria.").size(16).into();
    }

    let elements: Vec<Element<'_, Message>> = cards.iter().map(card).collect();

    scrollable(
        Wrap::with_elements(elements)
            .spacing(14.0)
            .line_spacing(14.0),
    )
    .height(Length::Fill)
    .into()
}

/// Blank grid shown while the feed load is still in flight
pub fn pending() -> Element<'static, Message> {
    Space::new(Length::Fill, Length::Fill).into()
}

/// Fixed message shown when the feed could not be loaded
pub fn load_error() -> Element<'static, Message> {
    text("Error loading job listings. Please try again later.")
        .size(16)
        .into()
}

/// One job card
fn card(job: &JobCard) -> Element<'_, Message> {
    let header = column![
        text(&job.title).size(18),
        text(&job.company).size(14),
    ]
    .spacing(4);

    let info = column![
        text(format!("📍 {}", job.location)).size(13),
        text(format!("📅 Posted: {}", job.posted)).size(13),
    ]
    .spacing(2);

    // "Apply Now" is a placeholder control, it goes nowhere yet
    let footer = row![
        text(&job.job_type).size(13),
        horizontal_space(),
        button(text("Apply Now").size(14))
            .on_press(Message::ApplyNow)
            .padding(8),
    ]
    .align_y(Alignment::Center);

    container(
        column![header, info, text(&job.snippet).size(14), footer].spacing(12),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(16)
    .style(container::rounded_box)
    .into()
}
