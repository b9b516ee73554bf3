use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub scoring_url: String,
    pub round_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring_url: "http://127.0.0.1:8000".into(),
            round_delay_ms: 600,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("risk_client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("scoring_url") {
                settings.scoring_url = v.clone();
            }
            if let Some(v) = file_cfg.get("round_delay_ms") {
                if let Ok(parsed) = v.parse::<u64>() {
                    settings.round_delay_ms = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("SCORING_URL") {
        settings.scoring_url = v;
    }
    if let Ok(v) = std::env::var("APP__SCORING_URL") {
        settings.scoring_url = v;
    }

    if let Ok(v) = std::env::var("APP__ROUND_DELAY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.round_delay_ms = parsed;
        }
    }

    settings
}
