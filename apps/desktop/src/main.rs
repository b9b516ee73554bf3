use std::{
    io::{self, BufRead, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use client_core::{
    scoring::HttpScoringService, InputEvent, SessionController, TimerDelay,
};
use shared::domain::Choice;
use tracing::info;

mod config;
mod surface;

use config::load_settings;
use surface::TerminalSurface;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the scoring backend; overrides config file and env.
    #[arg(long)]
    scoring_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.scoring_url {
        settings.scoring_url = url;
    }
    info!(scoring_url = %settings.scoring_url, "starting risk session");

    let scoring = HttpScoringService::new(&settings.scoring_url)?;
    let surface = Arc::new(TerminalSurface::new());
    let delay = Arc::new(TimerDelay::new(Duration::from_millis(
        settings.round_delay_ms,
    )));
    let mut controller = SessionController::new(surface.clone(), delay, scoring);

    println!("Answer each round with s (safe) or r (risky).");
    controller.handle(InputEvent::Start).await;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !controller.phase().is_terminal() {
        // The controller re-enables the controls before handle() returns,
        // so a disabled surface here means the session already ended.
        if !surface.accepting() {
            break;
        }
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let Some(choice) = parse_choice(line.trim()) else {
            println!("Please answer s or r.");
            continue;
        };
        controller.handle(InputEvent::ChoiceSelected(choice)).await;
    }

    Ok(())
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.to_ascii_lowercase().as_str() {
        "s" | "safe" => Some(Choice::Safe),
        "r" | "risky" => Some(Choice::Risky),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_choice_aliases_case_insensitively() {
        assert_eq!(parse_choice("s"), Some(Choice::Safe));
        assert_eq!(parse_choice("SAFE"), Some(Choice::Safe));
        assert_eq!(parse_choice("r"), Some(Choice::Risky));
        assert_eq!(parse_choice("Risky"), Some(Choice::Risky));
        assert_eq!(parse_choice("x"), None);
        assert_eq!(parse_choice(""), None);
    }
}
