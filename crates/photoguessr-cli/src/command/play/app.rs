use std::{
    io::{self, BufRead as _},
    thread,
};

use photoguessr_engine::{
    Action, GameOver, NotificationId, PhotoId, SessionPhase, SessionState, YearSpec,
};
use pastvu_client::ImageCache;
use photoguessr_runtime::{App, ColorScheme, Dispatcher};
use tracing::warn;

use super::input::{self, HELP};

/// Screen-level view of the session; output is only written when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Idle,
    Fetching,
    FetchFailed,
    Empty,
    Round { round: u32, photo_id: PhotoId },
    ExitMenu,
    GameOver(GameOver),
    Closed,
}

impl View {
    fn of(state: &SessionState) -> Self {
        if state.is_exit_menu_open() {
            return View::ExitMenu;
        }
        match state.phase() {
            SessionPhase::Closed => View::Closed,
            SessionPhase::GameOver => state.game_over().map_or(View::Closed, |g| View::GameOver(*g)),
            SessionPhase::RoundInProgress => match state.current_photo() {
                Some(photo) => View::Round {
                    round: state.mode().current() + 1,
                    photo_id: photo.id,
                },
                None => View::Idle,
            },
            SessionPhase::AwaitingFetch if state.is_fetching() => View::Fetching,
            SessionPhase::AwaitingFetch if state.fetch_failed() => View::FetchFailed,
            SessionPhase::AwaitingFetch if state.is_in_empty_state() => View::Empty,
            SessionPhase::AwaitingFetch => View::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    scheme: ColorScheme,
}

impl Palette {
    fn accent(self, text: &str) -> String {
        match self.scheme {
            ColorScheme::Dark => format!("\x1b[1;93m{text}\x1b[0m"),
            ColorScheme::Light => format!("\x1b[1;34m{text}\x1b[0m"),
            ColorScheme::System => text.to_owned(),
        }
    }
}

/// Plays a session on stdin/stdout.
#[derive(Debug)]
pub(crate) struct TerminalApp {
    palette: Palette,
    image_base_url: String,
    images: ImageCache,
    view: Option<View>,
    notification: Option<NotificationId>,
}

impl TerminalApp {
    pub(crate) fn new(
        scheme: ColorScheme,
        image_base_url: impl Into<String>,
        images: ImageCache,
    ) -> Self {
        Self {
            palette: Palette { scheme },
            image_base_url: image_base_url.into(),
            images,
            view: None,
            notification: None,
        }
    }

    fn print_notification(&mut self, state: &SessionState) {
        let Some(notification) = state.notification() else {
            self.notification = None;
            return;
        };
        if self.notification == Some(notification.id()) {
            return;
        }
        self.notification = Some(notification.id());
        println!();
        println!("{}", self.palette.accent(&notification.text()));
    }

    /// The cached file if the image was prefetched, the URL otherwise.
    fn image_location(&self, url: &str) -> String {
        self.images
            .cached(url)
            .map_or_else(|| url.to_owned(), |path| path.display().to_string())
    }

    fn print_view(&self, view: &View, state: &SessionState) {
        let location = &state.location().name;
        match view {
            View::Idle | View::Closed => {}
            View::Fetching => println!("Looking for photos near {location}..."),
            View::FetchFailed => {
                println!("Could not load photos. Type r to retry or q to leave.");
            }
            View::Empty => {
                println!("No photos found near {location}. Type r to retry or q to leave.");
            }
            View::Round { round, .. } => {
                let Some(photo) = state.current_photo() else {
                    return;
                };
                let range = state.guess_range();
                println!();
                println!(
                    "Round {round}/{}  score {}",
                    state.mode().max(),
                    self.palette.accent(&state.score().to_string())
                );
                println!("  \"{}\"", photo.title);
                println!("  {}", self.image_location(&photo.image_url(&self.image_base_url)));
                println!(
                    "Guess the year ({}-{}) [{}]:",
                    range.start(),
                    range.end(),
                    state.guess().unwrap_or(*range.start())
                );
            }
            View::ExitMenu => {
                if state.score() == 0 {
                    println!("Leave the game? [y/n]");
                } else {
                    println!(
                        "Leave the game? Your score of {} will be final. [y/n]",
                        state.score()
                    );
                }
            }
            View::GameOver(game_over) => {
                println!();
                println!(
                    "Game over, {}. Final score: {}",
                    game_over.reason,
                    self.palette.accent(&game_over.final_score.to_string())
                );
                for (i, round) in state.rounds().iter().enumerate() {
                    println!(
                        "  {:>2}. {:<40} {:>9}  guessed {}  {:>2} points",
                        i + 1,
                        truncate(&round.title, 40),
                        year_label(round.target),
                        round.guess,
                        round.score.points
                    );
                }
                println!("Press Enter to continue.");
            }
        }
    }
}

impl App for TerminalApp {
    fn init(&mut self, dispatcher: Dispatcher) {
        if dispatcher.dispatch(Action::StartSession).is_err() {
            return;
        }
        println!("{HELP}");
        // A pending stdin read must not hold up runtime shutdown.
        thread::spawn(move || read_input(&dispatcher));
    }

    fn draw(&mut self, state: &SessionState) {
        self.print_notification(state);
        let view = View::of(state);
        if self.view.as_ref() != Some(&view) {
            self.print_view(&view, state);
            self.view = Some(view);
        }
    }
}

fn read_input(dispatcher: &Dispatcher) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read input");
                break;
            }
        };
        let Some(actions) = input::parse_line(&line) else {
            println!("{HELP}");
            continue;
        };
        for action in actions {
            if dispatcher.dispatch(action).is_err() {
                return;
            }
        }
    }
    // Input closed; the session stops where it is.
    let _ = dispatcher.shutdown();
}

fn year_label(target: YearSpec) -> String {
    match target {
        YearSpec::Exact { year } => year.to_string(),
        YearSpec::Range { lower, upper } => format!("{lower}-{upper}"),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
