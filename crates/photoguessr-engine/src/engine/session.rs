use std::ops::RangeInclusive;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    Action, Command, FetchError, FetchPlan, FetchResponse, FetchTicket, GameLocation, GameMode,
    GameOver, GameOverReason, GameRules, Notification, NotificationId, Photo, PhotoBatch,
    PhotoDeck, RoundResult, SessionClosed, SessionSeed, score,
};

/// Coarse state of a session, derived from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SessionPhase {
    /// No photo in play: a fetch is pending, failed, or returned nothing usable.
    #[display("awaiting fetch")]
    AwaitingFetch,
    #[display("round in progress")]
    RoundInProgress,
    #[display("game over")]
    GameOver,
    /// The session ended and may be discarded. Only [`Action::StartSession`] applies.
    #[display("closed")]
    Closed,
}

/// State of one play-through for a single location.
///
/// All transitions go through [`Self::reduce`], which mutates the state and
/// returns the commands an outer driver has to execute. Actions that do not apply
/// in the current phase are ignored and produce no commands, so a presentation
/// layer cannot drive the session into an invalid state.
///
/// # Transitions
///
/// | action | applies when | effect |
/// |---|---|---|
/// | `StartSession` | no fetch pending | reset, fetch photos |
/// | `FetchCompleted` | ticket matches the pending fetch | fill deck, draw first photo |
/// | `SetGuess` | not game over, not closed | clamp into the guess range |
/// | `SubmitGuess` | photo and guess present, exit menu closed | score, draw next or end |
/// | `OpenExitMenu` | awaiting fetch or round in progress | open the exit menu |
/// | `ConfirmExit` | exit menu open | close (score 0) or game over |
/// | `DismissGameOver` | game over | close |
#[derive(Debug, Clone)]
pub struct SessionState {
    rules: GameRules,
    seed: SessionSeed,
    rng: Pcg32,
    score: u32,
    mode: GameMode,
    location: GameLocation,
    current_photo: Option<Photo>,
    guess: Option<i32>,
    notification: Option<Notification>,
    game_over: Option<GameOver>,
    exit_menu_open: bool,
    pending_fetch: Option<FetchTicket>,
    fetch_failed: bool,
    rounds: Vec<RoundResult>,
    closed: bool,
    next_ticket: u64,
    next_notification: u64,
}

impl SessionState {
    /// Creates an idle session with a random seed. Dispatch
    /// [`Action::StartSession`] to begin playing.
    #[must_use]
    pub fn new(location: GameLocation, rules: GameRules) -> Self {
        Self::with_seed(location, rules, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic draws.
    #[must_use]
    pub fn with_seed(location: GameLocation, rules: GameRules, seed: SessionSeed) -> Self {
        let mode = GameMode::limited(rules.max_rounds);
        Self {
            rules,
            seed,
            rng: Pcg32::from_seed(seed.0),
            score: 0,
            mode,
            location,
            current_photo: None,
            guess: None,
            notification: None,
            game_over: None,
            exit_menu_open: false,
            pending_fetch: None,
            fetch_failed: false,
            rounds: Vec::new(),
            closed: false,
            next_ticket: 0,
            next_notification: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.closed {
            SessionPhase::Closed
        } else if self.game_over.is_some() {
            SessionPhase::GameOver
        } else if self.current_photo.is_some() {
            SessionPhase::RoundInProgress
        } else {
            SessionPhase::AwaitingFetch
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn seed(&self) -> SessionSeed {
        self.seed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    #[must_use]
    pub fn location(&self) -> &GameLocation {
        &self.location
    }

    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        self.current_photo.as_ref()
    }

    #[must_use]
    pub fn guess(&self) -> Option<i32> {
        self.guess
    }

    #[must_use]
    pub fn guess_range(&self) -> &RangeInclusive<i32> {
        &self.rules.guess_range
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The outcome of the session, kept after it closes until it is started again.
    #[must_use]
    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    #[must_use]
    pub fn is_exit_menu_open(&self) -> bool {
        self.exit_menu_open
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Returns `true` if the last fetch failed. The session stays without a photo
    /// until it is started again.
    #[must_use]
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// Returns `true` if a fetch succeeded but yielded no playable photo.
    #[must_use]
    pub fn is_in_empty_state(&self) -> bool {
        !self.closed
            && self.current_photo.is_none()
            && self.game_over.is_none()
            && self
                .location
                .photo_batch
                .as_ref()
                .is_some_and(|batch| batch.deck.is_empty())
    }

    /// Returns `true` if [`Action::SubmitGuess`] would score a round.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase().is_round_in_progress() && self.guess.is_some() && !self.exit_menu_open
    }

    /// Rounds scored since the session started, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn remaining_photos(&self) -> usize {
        self.location
            .photo_batch
            .as_ref()
            .map_or(0, |batch| batch.deck.len())
    }

    /// Applies `action` and returns the commands to execute, in order.
    pub fn reduce(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::StartSession => self.start_session(),
            Action::FetchCompleted { ticket, result } => self.complete_fetch(ticket, result),
            Action::SetGuess(year) => {
                if !self.closed && self.game_over.is_none() {
                    self.guess = Some(self.rules.clamp_guess(year));
                }
                vec![]
            }
            Action::SubmitGuess => self.submit_guess(),
            Action::NotificationExpired(id) => {
                if self.notification.as_ref().is_some_and(|n| n.id() == id) {
                    self.notification = None;
                }
                vec![]
            }
            Action::OpenExitMenu => {
                if matches!(
                    self.phase(),
                    SessionPhase::AwaitingFetch | SessionPhase::RoundInProgress
                ) {
                    self.exit_menu_open = true;
                }
                vec![]
            }
            Action::CancelExitMenu => {
                self.exit_menu_open = false;
                vec![]
            }
            Action::ConfirmExit => self.confirm_exit(),
            Action::DismissGameOver => self.dismiss_game_over(),
        }
    }

    fn start_session(&mut self) -> Vec<Command> {
        if self.pending_fetch.is_some() {
            return vec![];
        }

        self.score = 0;
        self.mode.reset();
        self.location.photo_batch = None;
        self.current_photo = None;
        self.guess = Some(self.rules.clamp_guess(self.rules.default_guess));
        self.notification = None;
        self.game_over = None;
        self.exit_menu_open = false;
        self.fetch_failed = false;
        self.rounds.clear();
        self.closed = false;

        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_fetch = Some(ticket);

        vec![
            Command::CancelPrefetch,
            Command::CancelNotificationTimer,
            Command::FetchPhotos(FetchPlan {
                ticket,
                coordinate: self.location.coordinate,
                limit: self.rules.fetch_limit,
            }),
        ]
    }

    fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchResponse, FetchError>,
    ) -> Vec<Command> {
        if self.pending_fetch != Some(ticket) {
            return vec![];
        }
        self.pending_fetch = None;

        let Ok(response) = result else {
            self.fetch_failed = true;
            return vec![];
        };

        let filter = self.rules.title_filter;
        let photos = response
            .photos
            .into_iter()
            .filter(|record| filter.accepts(&record.title))
            .map(Photo::from)
            .collect();
        let mut deck = PhotoDeck::new(photos);
        let max_photos = usize::try_from(self.mode.max()).unwrap_or(usize::MAX);
        deck.cap_random(max_photos, &mut self.rng);
        self.current_photo = deck.draw_random(&mut self.rng).ok();

        let upcoming: Vec<String> = deck.iter().map(|photo| photo.image_ref.clone()).collect();
        self.location.photo_batch = Some(PhotoBatch {
            request_id: response.request_id,
            deck,
        });

        if upcoming.is_empty() {
            vec![]
        } else {
            vec![Command::PrefetchImages(upcoming)]
        }
    }

    fn submit_guess(&mut self) -> Vec<Command> {
        if !self.can_submit() {
            return vec![];
        }
        let (Some(guess), Some(photo)) = (self.guess, self.current_photo.take()) else {
            return vec![];
        };

        let score = score(photo.capture_year, guess);
        self.score = self.score.saturating_add(score.points);

        let notification_id = NotificationId(self.next_notification);
        self.next_notification += 1;
        self.notification = Some(Notification::new(notification_id, score));

        let commands = vec![
            Command::RecordSeen(photo.id),
            Command::StartNotificationTimer(notification_id),
        ];
        self.rounds.push(RoundResult {
            photo_id: photo.id,
            title: photo.title,
            target: photo.capture_year,
            guess,
            score,
        });

        self.mode.advance();
        if self.mode.is_limit_reached() {
            self.finish(GameOverReason::RoundLimitReached);
            return commands;
        }

        let next = self
            .location
            .photo_batch
            .as_mut()
            .and_then(|batch| batch.deck.draw_random(&mut self.rng).ok());
        match next {
            Some(photo) => self.current_photo = Some(photo),
            None => self.finish(GameOverReason::DeckExhausted),
        }
        commands
    }

    fn confirm_exit(&mut self) -> Vec<Command> {
        if !self.exit_menu_open {
            return vec![];
        }
        self.exit_menu_open = false;

        if self.score == 0 {
            return self.close();
        }
        self.pending_fetch = None;
        self.finish(GameOverReason::RoundLimitReached);
        vec![Command::CancelPrefetch]
    }

    fn dismiss_game_over(&mut self) -> Vec<Command> {
        if !self.phase().is_game_over() {
            return vec![];
        }
        self.close()
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.current_photo = None;
        self.exit_menu_open = false;
        self.game_over = Some(GameOver {
            final_score: self.score,
            reason,
        });
    }

    fn close(&mut self) -> Vec<Command> {
        self.closed = true;
        self.pending_fetch = None;
        self.current_photo = None;
        self.notification = None;
        self.exit_menu_open = false;
        vec![
            Command::CancelPrefetch,
            Command::CancelNotificationTimer,
            Command::CloseSession(SessionClosed {
                final_score: self.score,
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{City, FetchErrorKind, PhotoId, PhotoRecord, YearSpec};

    const SEED: SessionSeed = SessionSeed::from_bytes([7; 16]);

    fn rules(max_rounds: u32) -> GameRules {
        GameRules {
            max_rounds,
            ..GameRules::default()
        }
    }

    fn copenhagen(max_rounds: u32) -> SessionState {
        let location = City::find("Copenhagen").unwrap().location();
        SessionState::with_seed(location, rules(max_rounds), SEED)
    }

    fn record(id: i64, title: &str, year: i32, upper: Option<i32>) -> PhotoRecord {
        PhotoRecord {
            id: PhotoId(id),
            image_ref: format!("{id}.jpg"),
            title: title.to_owned(),
            capture_year: year,
            capture_year_upper_bound: upper,
        }
    }

    fn records(count: i64) -> Vec<PhotoRecord> {
        (0..count)
            .map(|i| record(i, &format!("Street view {i}"), 1900, None))
            .collect()
    }

    fn pending_ticket(commands: &[Command]) -> FetchTicket {
        commands
            .iter()
            .find_map(|command| match command {
                Command::FetchPhotos(plan) => Some(plan.ticket),
                _ => None,
            })
            .expect("no fetch issued")
    }

    fn started(max_rounds: u32, photos: Vec<PhotoRecord>) -> SessionState {
        let mut state = copenhagen(max_rounds);
        let ticket = pending_ticket(&state.reduce(Action::StartSession));
        state.reduce(Action::FetchCompleted {
            ticket,
            result: Ok(FetchResponse {
                request_id: "rid".to_owned(),
                photos,
            }),
        });
        state
    }

    /// Puts `current` in play with `deck` waiting, bypassing the random draw.
    fn in_round(mut state: SessionState, current: Photo, deck: Vec<Photo>) -> SessionState {
        state.current_photo = Some(current);
        state.guess = Some(state.rules.default_guess);
        state.location.photo_batch = Some(PhotoBatch {
            request_id: "rid".to_owned(),
            deck: PhotoDeck::new(deck),
        });
        state
    }

    fn guess(state: &mut SessionState, year: i32) -> Vec<Command> {
        state.reduce(Action::SetGuess(year));
        state.reduce(Action::SubmitGuess)
    }

    #[test]
    fn test_start_session_issues_fetch() {
        let mut state = copenhagen(10);
        assert!(state.phase().is_awaiting_fetch());
        let commands = state.reduce(Action::StartSession);

        let Some(Command::FetchPhotos(plan)) = commands.last() else {
            panic!("expected a fetch, got {commands:?}");
        };
        assert_eq!(plan.limit, 100);
        assert_eq!(plan.coordinate, state.location().coordinate);
        assert!(state.is_fetching());
        assert_eq!(state.guess(), Some(1913));
        assert!(state.phase().is_awaiting_fetch());
    }

    #[test]
    fn test_start_session_ignored_while_fetching() {
        let mut state = copenhagen(10);
        state.reduce(Action::StartSession);
        assert!(state.reduce(Action::StartSession).is_empty());
    }

    #[test]
    fn test_fetch_completion_draws_first_photo_and_prefetches_rest() {
        let state = started(3, records(20));
        assert!(state.phase().is_round_in_progress());
        assert!(!state.is_fetching());
        // capped to max rounds, minus the photo in play
        assert_eq!(state.remaining_photos(), 2);
        assert_eq!(
            state.location().photo_batch.as_ref().unwrap().request_id,
            "rid"
        );
    }

    #[test]
    fn test_fetch_completion_prefetch_command_lists_upcoming_images() {
        let mut state = copenhagen(3);
        let ticket = pending_ticket(&state.reduce(Action::StartSession));
        let commands = state.reduce(Action::FetchCompleted {
            ticket,
            result: Ok(FetchResponse {
                request_id: "rid".to_owned(),
                photos: records(3),
            }),
        });

        let [Command::PrefetchImages(images)] = commands.as_slice() else {
            panic!("expected a prefetch, got {commands:?}");
        };
        let current = state.current_photo().unwrap();
        let images: HashSet<_> = images.iter().cloned().collect();
        assert_eq!(images.len(), 2);
        assert!(!images.contains(&current.image_ref));
    }

    #[test]
    fn test_fetch_completion_drops_titles_leaking_the_year() {
        let photos = vec![
            record(1, "Opening of the bridge, 1937", 1937, None),
            record(2, "Harbour front", 1950, None),
        ];
        let state = started(10, photos);
        assert_eq!(state.current_photo().unwrap().id, PhotoId(2));
        assert_eq!(state.remaining_photos(), 0);
    }

    #[test]
    fn test_fetch_failure_stays_awaiting_without_retry() {
        let mut state = copenhagen(10);
        let ticket = pending_ticket(&state.reduce(Action::StartSession));
        let commands = state.reduce(Action::FetchCompleted {
            ticket,
            result: Err(FetchError::new(FetchErrorKind::Transport, "offline")),
        });
        assert!(commands.is_empty());
        assert!(state.phase().is_awaiting_fetch());
        assert!(state.fetch_failed());
        assert!(state.current_photo().is_none());
        assert!(!state.is_fetching());

        // the player can try again
        let commands = state.reduce(Action::StartSession);
        assert!(commands.last().is_some_and(Command::is_fetch_photos));
        assert!(!state.fetch_failed());
    }

    #[test]
    fn test_stale_fetch_completion_is_ignored() {
        let mut state = copenhagen(10);
        let ticket = pending_ticket(&state.reduce(Action::StartSession));
        let stale = FetchTicket(ticket.0 + 41);
        state.reduce(Action::FetchCompleted {
            ticket: stale,
            result: Ok(FetchResponse {
                request_id: "old".to_owned(),
                photos: records(5),
            }),
        });
        assert!(state.is_fetching());
        assert!(state.current_photo().is_none());
    }

    #[test]
    fn test_empty_response_enters_empty_state() {
        let state = started(10, vec![]);
        assert!(state.is_in_empty_state());
        assert!(state.phase().is_awaiting_fetch());
        assert!(state.game_over().is_none());
    }

    #[test]
    fn test_submit_scores_records_seen_and_starts_notification() {
        let mut state = started(10, vec![record(42, "Town hall", 1950, None)]);
        let commands = guess(&mut state, 1940);

        assert_eq!(state.score(), 30);
        assert_eq!(commands[0], Command::RecordSeen(PhotoId(42)));
        let Command::StartNotificationTimer(id) = commands[1] else {
            panic!("expected a notification timer, got {commands:?}");
        };
        let notification = state.notification().unwrap();
        assert_eq!(notification.id(), id);
        assert_eq!(notification.points_gained(), 30);
        assert_eq!(
            notification.text(),
            "Photo was taken in 1950 which is 10 years away. 30 points!"
        );
        assert_eq!(state.rounds().len(), 1);
        assert_eq!(state.rounds()[0].guess, 1940);
    }

    #[test]
    fn test_submit_ignored_without_photo() {
        let mut state = copenhagen(10);
        state.reduce(Action::StartSession);
        assert!(!state.can_submit());
        assert!(guess(&mut state, 1950).is_empty());
        assert_eq!(state.score(), 0);
        assert!(state.rounds().is_empty());
    }

    #[test]
    fn test_submit_ignored_while_exit_menu_open() {
        let mut state = started(10, records(3));
        state.reduce(Action::OpenExitMenu);
        assert!(state.reduce(Action::SubmitGuess).is_empty());
        assert!(state.rounds().is_empty());
    }

    #[test]
    fn test_set_guess_clamps_into_range() {
        let mut state = started(10, records(3));
        state.reduce(Action::SetGuess(1500));
        assert_eq!(state.guess(), Some(1826));
        state.reduce(Action::SetGuess(2100));
        assert_eq!(state.guess(), Some(2000));
    }

    #[test]
    fn test_copenhagen_scenario() {
        let photo_a = Photo::new(1, "a.jpg", "Nyhavn", YearSpec::Exact { year: 1950 });
        let photo_b = Photo::new(
            2,
            "b.jpg",
            "Town hall square",
            YearSpec::Range {
                lower: 1900,
                upper: 1920,
            },
        );
        let mut state = in_round(copenhagen(2), photo_a, vec![photo_b.clone()]);

        guess(&mut state, 1950);
        assert_eq!(state.notification().unwrap().points_gained(), 50);
        assert_eq!(state.score(), 50);
        assert_eq!(state.mode().current(), 1);
        assert_eq!(state.current_photo(), Some(&photo_b));

        guess(&mut state, 2000);
        assert_eq!(state.notification().unwrap().points_gained(), 0);
        assert_eq!(state.score(), 50);
        assert_eq!(
            state.game_over(),
            Some(&GameOver {
                final_score: 50,
                reason: GameOverReason::RoundLimitReached
            })
        );
        assert!(state.current_photo().is_none());
    }

    #[test]
    fn test_exhausted_deck_wins_over_round_counter() {
        let photo = Photo::new(9, "z.jpg", "Quay", YearSpec::Exact { year: 1930 });
        let mut state = in_round(copenhagen(3), photo, vec![]);
        state.mode = GameMode::Limited { max: 3, current: 1 };

        guess(&mut state, 1930);
        assert_eq!(state.mode().current() + 1, state.mode().max());
        assert_eq!(
            state.game_over().map(|g| g.reason),
            Some(GameOverReason::DeckExhausted)
        );
        assert!(state.phase().is_game_over());
    }

    #[test]
    fn test_session_plays_through_all_fetched_photos() {
        let mut state = started(10, records(4));
        let mut seen = HashSet::new();
        while let Some(photo) = state.current_photo() {
            assert!(seen.insert(photo.id));
            guess(&mut state, 1900);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(state.score(), 200);
        assert_eq!(
            state.game_over().map(|g| g.reason),
            Some(GameOverReason::DeckExhausted)
        );
    }

    #[test]
    fn test_exit_with_zero_score_closes_without_game_over() {
        let mut state = started(10, records(3));
        state.reduce(Action::OpenExitMenu);
        assert!(state.is_exit_menu_open());
        let commands = state.reduce(Action::ConfirmExit);

        assert_eq!(
            commands.last(),
            Some(&Command::CloseSession(SessionClosed { final_score: 0 }))
        );
        assert!(commands.contains(&Command::CancelPrefetch));
        assert!(state.game_over().is_none());
        assert!(state.phase().is_closed());
    }

    #[test]
    fn test_exit_with_score_ends_like_round_limit() {
        let mut state = started(10, records(5));
        guess(&mut state, 1900);
        state.reduce(Action::OpenExitMenu);
        let commands = state.reduce(Action::ConfirmExit);

        assert_eq!(commands, vec![Command::CancelPrefetch]);
        assert_eq!(
            state.game_over(),
            Some(&GameOver {
                final_score: 50,
                reason: GameOverReason::RoundLimitReached
            })
        );
        assert!(!state.is_exit_menu_open());
    }

    #[test]
    fn test_exit_menu_reachable_while_fetching() {
        let mut state = copenhagen(10);
        state.reduce(Action::StartSession);
        state.reduce(Action::OpenExitMenu);
        assert!(state.is_exit_menu_open());

        let commands = state.reduce(Action::ConfirmExit);
        assert!(commands.last().is_some_and(Command::is_close_session));
        assert!(!state.is_fetching());
    }

    #[test]
    fn test_cancel_exit_menu_changes_nothing_else() {
        let mut state = started(10, records(3));
        let before = state.current_photo().cloned();
        state.reduce(Action::OpenExitMenu);
        assert!(state.reduce(Action::CancelExitMenu).is_empty());
        assert!(!state.is_exit_menu_open());
        assert_eq!(state.current_photo().cloned(), before);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_confirm_exit_requires_open_menu() {
        let mut state = started(10, records(3));
        assert!(state.reduce(Action::ConfirmExit).is_empty());
        assert!(state.phase().is_round_in_progress());
    }

    #[test]
    fn test_dismiss_game_over_closes_with_final_score() {
        let mut state = started(1, records(3));
        guess(&mut state, 1900);
        assert!(state.phase().is_game_over());

        let commands = state.reduce(Action::DismissGameOver);
        assert_eq!(
            commands,
            vec![
                Command::CancelPrefetch,
                Command::CancelNotificationTimer,
                Command::CloseSession(SessionClosed { final_score: 50 }),
            ]
        );
        assert!(state.phase().is_closed());
        assert!(state.reduce(Action::DismissGameOver).is_empty());
    }

    #[test]
    fn test_notification_expiry_only_clears_matching_notification() {
        let mut state = started(10, records(5));
        let first = match guess(&mut state, 1900)[1] {
            Command::StartNotificationTimer(id) => id,
            ref other => panic!("unexpected command {other:?}"),
        };
        let second = match guess(&mut state, 1900)[1] {
            Command::StartNotificationTimer(id) => id,
            ref other => panic!("unexpected command {other:?}"),
        };
        assert_ne!(first, second);

        state.reduce(Action::NotificationExpired(first));
        assert_eq!(state.notification().map(Notification::id), Some(second));
        state.reduce(Action::NotificationExpired(second));
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_restart_after_close_resets_session() {
        let mut state = started(2, records(5));
        guess(&mut state, 1900);
        guess(&mut state, 1900);
        state.reduce(Action::DismissGameOver);
        assert!(state.phase().is_closed());

        let commands = state.reduce(Action::StartSession);
        assert!(commands.last().is_some_and(Command::is_fetch_photos));
        assert_eq!(state.score(), 0);
        assert_eq!(state.mode().current(), 0);
        assert!(state.rounds().is_empty());
        assert!(state.location().photo_batch.is_none());
        assert!(state.phase().is_awaiting_fetch());
    }

    #[test]
    fn test_same_seed_draws_same_photos() {
        let a = started(5, records(30));
        let b = started(5, records(30));
        assert_eq!(a.current_photo(), b.current_photo());
        assert_eq!(a.location().photo_batch, b.location().photo_batch);
    }
}
