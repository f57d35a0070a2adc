//! Game HTTP routes: start, join, play and state.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, Scores, Slot};
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::game::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub player1: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinGameRequest {
    pub player2: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayRoundRequest {
    pub player: String,
    /// Raw move name; validated by the engine after the turn checks.
    pub choice: String,
}

#[derive(Debug, Serialize)]
struct GameStateResponse {
    message: String,
    game_state: GameState,
}

#[derive(Debug, Serialize)]
struct PlayRoundResponse {
    message: String,
    turn: Slot,
    scores: Scores,
}

/// Run one game operation on the blocking pool; store I/O never runs on the
/// worker thread.
async fn with_game<F, R>(app_state: &web::Data<AppState>, op: F) -> Result<R, AppError>
where
    F: FnOnce(&GameService) -> Result<R, AppError> + Send + 'static,
    R: Send + 'static,
{
    let game = Arc::clone(&app_state.game);
    web::block(move || op(&game))
        .await
        .map_err(|e| AppError::internal(format!("blocking pool unavailable: {e}")))?
}

/// POST /api/start
///
/// Registers player 1 and replaces any game already stored.
async fn start_game(
    body: ValidatedJson<StartGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player1 = body.into_inner().player1;
    let game_state = with_game(&app_state, move |game| game.start(&player1)).await?;

    Ok(HttpResponse::Ok().json(GameStateResponse {
        message: "Player 1 registered. Waiting for Player 2.".to_string(),
        game_state,
    }))
}

/// POST /api/join
async fn join_game(
    body: ValidatedJson<JoinGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player2 = body.into_inner().player2;
    let message = format!("Player 2 ({player2}) joined. Player 1 starts the round.");
    let game_state = with_game(&app_state, move |game| game.join(&player2)).await?;

    Ok(HttpResponse::Ok().json(GameStateResponse {
        message,
        game_state,
    }))
}

/// POST /api/play
async fn play_round(
    body: ValidatedJson<PlayRoundRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let PlayRoundRequest { player, choice } = body.into_inner();
    let message = format!("{player} chose {choice}.");
    let report = with_game(&app_state, move |game| game.play(&player, &choice)).await?;

    Ok(HttpResponse::Ok().json(PlayRoundResponse {
        message,
        turn: report.turn,
        scores: report.scores,
    }))
}

/// GET /api/state
async fn get_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let game_state = with_game(&app_state, |game| game.state()).await?;
    Ok(HttpResponse::Ok().json(game_state))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::post().to(start_game))
        .route("/join", web::post().to(join_game))
        .route("/play", web::post().to(play_round))
        .route("/state", web::get().to(get_state));
}
