/// One round's fixed content: a certain payout against a gamble, plus the
/// encouragement line shown under the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    /// 1-based position within the session.
    pub ordinal: u8,
    pub safe_label: &'static str,
    pub risky_label: &'static str,
    pub nudge: &'static str,
}

pub const SCENARIO_COUNT: usize = 10;

/// The full catalog, known at startup and never mutated. Stakes escalate
/// across the session so later rounds separate risk attitudes more sharply.
pub const SCENARIOS: [Scenario; SCENARIO_COUNT] = [
    Scenario {
        ordinal: 1,
        safe_label: "Take $10 for sure",
        risky_label: "Flip a coin for $25 or nothing",
        nudge: "No wrong answers here, just go with your gut.",
    },
    Scenario {
        ordinal: 2,
        safe_label: "Take $20 for sure",
        risky_label: "Flip a coin for $45 or nothing",
        nudge: "Same coin, bigger pot.",
    },
    Scenario {
        ordinal: 3,
        safe_label: "Take $30 for sure",
        risky_label: "Flip a coin for $65 or nothing",
        nudge: "Would you rather be certain or lucky?",
    },
    Scenario {
        ordinal: 4,
        safe_label: "Take $40 for sure",
        risky_label: "Flip a coin for $85 or nothing",
        nudge: "Almost halfway there.",
    },
    Scenario {
        ordinal: 5,
        safe_label: "Take $50 for sure",
        risky_label: "Flip a coin for $110 or nothing",
        nudge: "The gamble pays slightly better than double.",
    },
    Scenario {
        ordinal: 6,
        safe_label: "Take $60 for sure",
        risky_label: "Flip a coin for $130 or nothing",
        nudge: "Stick with your instincts.",
    },
    Scenario {
        ordinal: 7,
        safe_label: "Take $70 for sure",
        risky_label: "Flip a coin for $150 or nothing",
        nudge: "Bigger stakes, same odds.",
    },
    Scenario {
        ordinal: 8,
        safe_label: "Take $80 for sure",
        risky_label: "Flip a coin for $170 or nothing",
        nudge: "Only three rounds left.",
    },
    Scenario {
        ordinal: 9,
        safe_label: "Take $90 for sure",
        risky_label: "Flip a coin for $190 or nothing",
        nudge: "Nearly done.",
    },
    Scenario {
        ordinal: 10,
        safe_label: "Take $100 for sure",
        risky_label: "Flip a coin for $210 or nothing",
        nudge: "Last one. Make it count.",
    },
];
