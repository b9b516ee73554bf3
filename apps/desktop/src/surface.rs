use std::sync::atomic::{AtomicBool, Ordering};

use client_core::{scenarios::Scenario, PresentationSurface, RoundProgress};

/// Display regions mapped onto stdout. The choice controls are "enabled" by
/// letting the input loop accept the next line.
#[derive(Default)]
pub struct TerminalSurface {
    accepting: AtomicBool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting(&self) -> bool {
        self.accepting.load(Ordering::SeqCst)
    }
}

impl PresentationSurface for TerminalSurface {
    fn present_scenario(&self, scenario: &Scenario, progress: RoundProgress) {
        println!();
        println!("{progress}");
        println!("  [s] {}", scenario.safe_label);
        println!("  [r] {}", scenario.risky_label);
        println!("  {}", scenario.nudge);
    }

    fn set_choices_enabled(&self, enabled: bool) {
        self.accepting.store(enabled, Ordering::SeqCst);
    }

    fn show_score(&self, formatted: &str) {
        println!();
        println!("Your risk score: {formatted}");
    }

    fn show_failure(&self, message: &str) {
        println!();
        println!("Could not score your session: {message}");
        println!("Restart the session to try again.");
    }
}
