//! Session controller for the sequential risk-preference game: presents ten
//! fixed scenarios one at a time, records one safe/risky choice per round,
//! and submits the completed sequence to the remote scoring endpoint.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use shared::{
    domain::Choice,
    protocol::{ScoreRequest, ScoreResponse},
};
use tracing::{debug, error, info, warn};

pub mod scenarios;
pub mod scoring;

use scenarios::{Scenario, SCENARIOS, SCENARIO_COUNT};
use scoring::ScoringService;

/// Pause between recording a choice and the next transition. Keeps the
/// round-to-round transition legible; not a correctness requirement.
pub const ROUND_TRANSITION_DELAY: Duration = Duration::from_millis(600);

/// Round progress shown alongside each scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    /// 1-based round being presented.
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for RoundProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {} of {}", self.current, self.total)
    }
}

/// Named display regions of the host surface. The controller only writes
/// into these; it never owns their layout or styling.
pub trait PresentationSurface: Send + Sync {
    /// Fill the question, option, nudge, and progress regions for one round.
    fn present_scenario(&self, scenario: &Scenario, progress: RoundProgress);
    /// Enable or disable both choice controls together.
    fn set_choices_enabled(&self, enabled: bool);
    /// Hide the question regions and reveal the result area with the score.
    fn show_score(&self, formatted: &str);
    /// Hide the question regions and surface a failure message. The result
    /// area stays hidden.
    fn show_failure(&self, message: &str);
}

/// Fixed deferral applied between phase transitions.
#[async_trait]
pub trait TransitionDelay: Send + Sync {
    async fn pause(&self);
}

/// Timer-backed delay used by host applications.
pub struct TimerDelay(Duration);

impl TimerDelay {
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }
}

impl Default for TimerDelay {
    fn default() -> Self {
        Self(ROUND_TRANSITION_DELAY)
    }
}

#[async_trait]
impl TransitionDelay for TimerDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// Zero-length delay for tests and headless drivers.
pub struct NoDelay;

#[async_trait]
impl TransitionDelay for NoDelay {
    async fn pause(&self) {}
}

/// Discrete inputs the host binds to its own controls. The dispatcher maps
/// these onto phase transitions, so the controller stays independent of how
/// the surface wires its widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Start,
    ChoiceSelected(Choice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Presenting(usize),
    AwaitingChoice(usize),
    Submitting,
    /// Score shown. Terminal.
    Done,
    /// Error shown; no automatic retry. Terminal until the host restarts
    /// the session with a fresh controller.
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done | Phase::Failed)
    }
}

/// Per-session mutable state. `choices.len() == round` at every point a
/// caller can observe.
#[derive(Debug, Default)]
struct SessionState {
    round: usize,
    choices: Vec<Choice>,
}

pub struct SessionController<S: ScoringService> {
    surface: Arc<dyn PresentationSurface>,
    delay: Arc<dyn TransitionDelay>,
    scoring: S,
    state: SessionState,
    phase: Phase,
}

impl<S: ScoringService> SessionController<S> {
    pub fn new(
        surface: Arc<dyn PresentationSurface>,
        delay: Arc<dyn TransitionDelay>,
        scoring: S,
    ) -> Self {
        Self {
            surface,
            delay,
            scoring,
            state: SessionState::default(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Choices recorded so far, in round order.
    pub fn choices(&self) -> &[Choice] {
        &self.state.choices
    }

    /// Route one discrete input to its phase transition. Inputs that do not
    /// match the current phase are logged and dropped.
    pub async fn handle(&mut self, event: InputEvent) {
        match (self.phase, event) {
            (Phase::Idle, InputEvent::Start) => self.present_round(0),
            (Phase::AwaitingChoice(index), InputEvent::ChoiceSelected(choice)) => {
                self.record_choice(index, choice).await;
            }
            (phase, event) => {
                warn!(?phase, ?event, "input does not match current phase; ignored");
            }
        }
    }

    fn present_round(&mut self, index: usize) {
        debug_assert!(index < SCENARIO_COUNT);
        self.phase = Phase::Presenting(index);
        let progress = RoundProgress {
            current: index + 1,
            total: SCENARIO_COUNT,
        };
        debug!(round = index, "presenting scenario");
        self.surface.present_scenario(&SCENARIOS[index], progress);
        self.surface.set_choices_enabled(true);
        self.phase = Phase::AwaitingChoice(index);
    }

    async fn record_choice(&mut self, index: usize, choice: Choice) {
        // Disable before anything else so a double activation of the same
        // control cannot land a second choice for this round.
        self.surface.set_choices_enabled(false);
        self.state.choices.push(choice);
        self.state.round += 1;
        debug_assert_eq!(self.state.choices.len(), self.state.round);
        info!(round = index, choice = choice.as_str(), "choice recorded");

        self.delay.pause().await;
        if self.state.round < SCENARIO_COUNT {
            self.present_round(self.state.round);
        } else {
            self.submit().await;
        }
    }

    /// Reached exactly once, after the final round. All submission failures
    /// terminate the session in `Failed`; the host must start over to retry.
    async fn submit(&mut self) {
        self.phase = Phase::Submitting;
        let request = ScoreRequest::Risk {
            choices: self.state.choices.clone(),
        };
        info!(
            choices = self.state.choices.len(),
            "submitting choice sequence for scoring"
        );
        match self.scoring.submit(&request).await {
            Ok(ScoreResponse { risk_score }) => {
                let formatted = format!("{risk_score:.3}");
                self.surface.show_score(&formatted);
                self.phase = Phase::Done;
                info!(score = %formatted, "session complete");
            }
            Err(err) => {
                error!(error = %err, "scoring submission failed");
                self.surface.show_failure(&err.to_string());
                self.phase = Phase::Failed;
            }
        }
    }
}
