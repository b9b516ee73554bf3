use serde::{Deserialize, Serialize};

use crate::domain::Choice;

/// Discriminated union the scoring endpoint accepts on `POST /game_data`,
/// keyed on the `game` field. The sequential-round client only ever submits
/// the `risk` variant; the remaining variants document the full wire
/// contract of the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum ScoreRequest {
    Single { choice: Choice },
    Multiple { choices: Vec<Choice> },
    Slider { certainty: f64 },
    Balloon { pumps: u32, popped: bool },
    Budget { risky_tokens: u32 },
    Risk { choices: Vec<Choice> },
}

/// Success body: a single numeric risk score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub risk_score: f64,
}

/// Error body carried on non-2xx responses. The endpoint is a FastAPI
/// service, so the detail field is optional and free-form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn risk_request_serializes_with_game_tag_and_snake_case_choices() {
        let request = ScoreRequest::Risk {
            choices: vec![Choice::Safe, Choice::Risky, Choice::Risky],
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({ "game": "risk", "choices": ["safe", "risky", "risky"] })
        );
    }

    #[test]
    fn remaining_game_variants_match_backend_shapes() {
        let cases = [
            (
                ScoreRequest::Single {
                    choice: Choice::Risky,
                },
                json!({ "game": "single", "choice": "risky" }),
            ),
            (
                ScoreRequest::Slider { certainty: 62.5 },
                json!({ "game": "slider", "certainty": 62.5 }),
            ),
            (
                ScoreRequest::Balloon {
                    pumps: 7,
                    popped: true,
                },
                json!({ "game": "balloon", "pumps": 7, "popped": true }),
            ),
            (
                ScoreRequest::Budget { risky_tokens: 40 },
                json!({ "game": "budget", "risky_tokens": 40 }),
            ),
        ];
        for (request, expected) in cases {
            assert_eq!(serde_json::to_value(&request).expect("serialize"), expected);
        }
    }

    #[test]
    fn score_response_requires_numeric_field() {
        let ok: ScoreResponse =
            serde_json::from_value(json!({ "risk_score": 0.4567 })).expect("decode");
        assert_eq!(ok.risk_score, 0.4567);

        assert!(serde_json::from_value::<ScoreResponse>(json!({ "score": 0.4567 })).is_err());
        assert!(serde_json::from_value::<ScoreResponse>(json!({ "risk_score": "high" })).is_err());
    }

    #[test]
    fn error_body_detail_is_optional() {
        let body: ErrorBody = serde_json::from_value(json!({})).expect("decode");
        assert!(body.detail.is_none());

        let body: ErrorBody =
            serde_json::from_value(json!({ "detail": "bad request" })).expect("decode");
        assert_eq!(body.detail.as_deref(), Some("bad request"));
    }
}
