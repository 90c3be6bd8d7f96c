//! HTTP client for the remote Mancala game server.
//!
//! The client is stateless: it holds only the server address. Every call
//! issues exactly one request, with no retries and no caching.

use crate::error::{ClientError, ErrorResponse};
use async_trait::async_trait;
use derive_getters::Getters;
use derive_new::new;
use mancala_board::{GameId, GameSnapshot, PitPlace};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

const JSON: &str = "application/json";

/// The three operations the game server offers.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Starts a new game.
    async fn create_game(&self) -> Result<GameSnapshot, ClientError>;

    /// Sows from `pit`; the server applies the rules and returns the result.
    async fn submit_move(&self, game_id: &GameId, pit: PitPlace)
    -> Result<GameSnapshot, ClientError>;

    /// Ends the game on the server.
    async fn reset_game(&self, game_id: &GameId) -> Result<(), ClientError>;
}

/// Body of a move request.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Pit to sow from.
    selected_pit: PitPlace,
    /// Game the move belongs to.
    game_id: GameId,
}

/// Game server client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    /// Base URL, e.g. `http://localhost:8080/mancala/api/v1`.
    base_url: String,
    /// HTTP client.
    client: reqwest::Client,
}

impl HttpGameClient {
    /// Creates a client for the given base URL.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Creating game server client");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL requests are sent to.
    #[instrument(skip(self))]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `segments` onto the base URL, percent-encoding each one.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = |reason: String| ClientError::Network {
            message: format!("Invalid server URL {}: {}", self.base_url, reason),
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Decodes a snapshot from a success response, or maps the failure.
    #[instrument(skip_all)]
    async fn read_snapshot(response: Response) -> Result<GameSnapshot, ClientError> {
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        let body = response.bytes().await?;
        let snapshot: GameSnapshot = serde_json::from_slice(&body)?;
        debug!(
            game_id = %snapshot.game_id(),
            player = %snapshot.player(),
            winner = ?snapshot.player_winner(),
            "Decoded snapshot"
        );
        Ok(snapshot)
    }

    /// Turns a non-success response into a typed error.
    #[instrument(skip_all)]
    async fn reject(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ErrorResponse>(&body).ok();
        warn!(status = %status, body = %body, "Server rejected request");

        if status == StatusCode::FORBIDDEN {
            let response = parsed.unwrap_or_else(|| {
                let message = if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Forbidden").to_string()
                } else {
                    body.clone()
                };
                ErrorResponse::new(status.as_u16(), message)
            });
            return ClientError::RuleViolation { response };
        }

        let message = parsed
            .map(|response| response.error_message().clone())
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        ClientError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl GameApi for HttpGameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn create_game(&self) -> Result<GameSnapshot, ClientError> {
        info!("Creating game");
        let response = self
            .client
            .get(self.endpoint(&["create-game"])?)
            .header(CONTENT_TYPE, JSON)
            .send()
            .await?;
        Self::read_snapshot(response).await
    }

    #[instrument(skip(self), fields(game_id = %game_id, pit = %pit))]
    async fn submit_move(
        &self,
        game_id: &GameId,
        pit: PitPlace,
    ) -> Result<GameSnapshot, ClientError> {
        info!("Submitting move");
        let request = MoveRequest::new(pit, game_id.clone());
        let response = self
            .client
            .post(self.endpoint(&["update-game"])?)
            .header(CONTENT_TYPE, JSON)
            .json(&request)
            .send()
            .await?;
        Self::read_snapshot(response).await
    }

    #[instrument(skip(self), fields(game_id = %game_id))]
    async fn reset_game(&self, game_id: &GameId) -> Result<(), ClientError> {
        info!("Resetting game");
        let response = self
            .client
            .delete(self.endpoint(&["delete-game", game_id.as_str()])?)
            .header(CONTENT_TYPE, JSON)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        debug!(status = %response.status(), "Game deleted");
        Ok(())
    }
}
