//! `/api/v1/score` endpoints.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::ScoreCard;
use crate::error::AppError;
use crate::extractors::ValidatedQuery;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubmitScoreQuery {
    pub name: String,
    pub hole: i64,
    /// Score for the hole
    pub par: i64,
}

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub name: String,
}

/// Wire shape of a score card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreCardResponse {
    pub name: String,
    pub hole_one: i32,
    pub hole_two: i32,
    pub hole_three: i32,
    pub hole_four: i32,
    pub hole_five: i32,
    pub hole_six: i32,
    pub hole_seven: i32,
    pub hole_eight: i32,
    pub hole_nine: i32,
    /// Sum of the nine holes
    pub score: i32,
}

impl From<&ScoreCard> for ScoreCardResponse {
    fn from(card: &ScoreCard) -> Self {
        let [
            hole_one,
            hole_two,
            hole_three,
            hole_four,
            hole_five,
            hole_six,
            hole_seven,
            hole_eight,
            hole_nine,
        ] = *card.holes();
        Self {
            name: card.name().to_string(),
            hole_one,
            hole_two,
            hole_three,
            hole_four,
            hole_five,
            hole_six,
            hole_seven,
            hole_eight,
            hole_nine,
            score: card.total(),
        }
    }
}

async fn list_scores(
    app_state: web::Data<AppState>,
) -> Result<web::Json<Vec<ScoreCardResponse>>, AppError> {
    let cards = app_state.scores().standings().await?;
    Ok(web::Json(cards.iter().map(ScoreCardResponse::from).collect()))
}

async fn submit_score(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<SubmitScoreQuery>,
) -> Result<HttpResponse, AppError> {
    let SubmitScoreQuery { name, hole, par } = query.into_inner();
    app_state.scores().submit(&name, hole, par).await?;
    Ok(HttpResponse::Ok().finish())
}

async fn delete_score(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<PlayerQuery>,
) -> Result<HttpResponse, AppError> {
    app_state.scores().delete(&query.name).await?;
    Ok(HttpResponse::Ok().finish())
}

async fn reset_scores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    app_state.scores().reset().await?;
    Ok(HttpResponse::Ok().finish())
}

async fn join(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<PlayerQuery>,
) -> Result<HttpResponse, AppError> {
    let card = app_state.scores().join(&query.name).await?;
    Ok(HttpResponse::Created().json(ScoreCardResponse::from(&card)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_scores))
            .route(web::post().to(submit_score))
            .route(web::delete().to(delete_score)),
    )
    .service(web::resource("/reset").route(web::get().to(reset_scores)))
    .service(web::resource("/join").route(web::post().to(join)));
}
