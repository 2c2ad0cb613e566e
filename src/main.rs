use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};

// Declare the application modules
mod feed;
mod state;
mod ui;

use feed::loader::{self, FeedSource};
use state::data::JobRecord;
use state::filter::filter_jobs;
use ui::cards::{self, JobCard};

/// Main application state
struct JobBoard {
    /// Every job from the feed, assigned once on a successful load
    all_jobs: Vec<JobRecord>,
    /// What currently occupies the job grid
    grid: GridContent,
    /// Current text of the title/company search input
    title_query: String,
    /// Current text of the location search input
    location_query: String,
    /// Status message to display to the user
    status: String,
}

/// Contents of the job grid region
#[derive(Debug, Clone, PartialEq)]
enum GridContent {
    /// The feed has not arrived yet; the grid stays blank
    Pending,
    /// Cards for the jobs that survived the last search (may be empty)
    Cards(Vec<JobCard>),
    /// The feed could not be loaded
    LoadError,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot feed load finished
    FeedLoaded(Result<Vec<JobRecord>, String>),
    /// User edited the title/company search input
    TitleQueryChanged(String),
    /// User edited the location search input
    LocationQueryChanged(String),
    /// User clicked "Search" or pressed Enter in either input
    SearchRequested,
    /// User clicked "Apply Now" on a card
    ApplyNow,
}

impl JobBoard {
    /// Create a new instance of the application and start the one-shot
    /// feed load
    fn new() -> (Self, Task<Message>) {
        let board = JobBoard {
            all_jobs: Vec::new(),
            grid: GridContent::Pending,
            title_query: String::new(),
            location_query: String::new(),
            status: String::from("Loading job listings..."),
        };

        println!("💼 Job Board starting, feed: {}", loader::DEFAULT_FEED);

        let load = Task::perform(
            load_feed(FeedSource::parse(loader::DEFAULT_FEED)),
            Message::FeedLoaded,
        );

        (board, load)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FeedLoaded(Ok(jobs)) => {
                println!("✅ Loaded {} job listings", jobs.len());
                self.status = format!("{} job listings available.", jobs.len());
                self.all_jobs = jobs;

                // Display all jobs initially
                self.grid = GridContent::Cards(cards::to_cards(&self.all_jobs));
            }
            Message::FeedLoaded(Err(error)) => {
                eprintln!("❌ Could not fetch jobs: {}", error);
                self.status = format!("Load failed: {}", error);
                self.grid = GridContent::LoadError;
            }
            Message::TitleQueryChanged(value) => {
                self.title_query = value;
            }
            Message::LocationQueryChanged(value) => {
                self.location_query = value;
            }
            Message::SearchRequested => {
                let matches =
                    filter_jobs(&self.all_jobs, &self.title_query, &self.location_query);
                self.grid = GridContent::Cards(cards::to_cards(&matches));
            }
            Message::ApplyNow => {
                // Placeholder control, nothing to apply to yet
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let heading = text("Find your next job").size(32);

        let controls = row![
            text_input("Job title or company", &self.title_query)
                .on_input(Message::TitleQueryChanged)
                .on_submit(Message::SearchRequested)
                .padding(10)
                .width(Length::Fixed(260.0)),
            text_input("Location", &self.location_query)
                .on_input(Message::LocationQueryChanged)
                .on_submit(Message::SearchRequested)
                .padding(10)
                .width(Length::Fixed(200.0)),
            button("Search")
                .on_press(Message::SearchRequested)
                .padding(10),
        ]
        .spacing(10);

        let grid: Element<Message> = match &self.grid {
            GridContent::Pending => cards::pending(),
            GridContent::Cards(list) => cards::grid(list),
            GridContent::LoadError => cards::load_error(),
        };

        let content = column![heading, controls, grid, text(&self.status).size(14)]
            .spacing(20)
            .padding(30)
            .align_x(Alignment::Start);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Job Board",
        JobBoard::update,
        JobBoard::view,
    )
    .theme(JobBoard::theme)
    .centered()
    .run_with(JobBoard::new)
}

/// Run the one-shot feed load and flatten the error for the message
async fn load_feed(source: FeedSource) -> Result<Vec<JobRecord>, String> {
    loader::load(&source).await.map_err(|e| e.to_string())
}
