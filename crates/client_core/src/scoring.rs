use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::SubmitError,
    protocol::{ErrorBody, ScoreRequest, ScoreResponse},
};
use tracing::debug;
use url::Url;

/// Route the backend exposes for score submissions.
const SCORING_ROUTE: &str = "game_data";

/// External scoring collaborator. Production uses HTTP; tests substitute
/// stubs so controller behavior can be exercised without a network.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn submit(&self, request: &ScoreRequest) -> Result<ScoreResponse, SubmitError>;
}

/// Submits score requests to the backend's `/game_data` route as JSON.
pub struct HttpScoringService {
    http: Client,
    endpoint: Url,
}

impl HttpScoringService {
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        let base = Url::parse(base_url).map_err(|e| {
            SubmitError::Transport(format!("invalid scoring endpoint '{base_url}': {e}"))
        })?;
        let endpoint = base.join(SCORING_ROUTE).map_err(|e| {
            SubmitError::Transport(format!("invalid scoring endpoint '{base_url}': {e}"))
        })?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn submit(&self, request: &ScoreRequest) -> Result<ScoreResponse, SubmitError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, "scoring endpoint answered");

        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<ScoreResponse>()
            .await
            .map_err(|e| SubmitError::MalformedScore(e.to_string()))
    }
}
