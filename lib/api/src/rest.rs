use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use recx_core::{Error, ItemId, RecommendationModel, Recommender, UserId, DEFAULT_TOP_N};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
struct RecommendResponse {
    user_id: UserId,
    top_n: usize,
    recommendations: Vec<ItemId>,
}

#[derive(Serialize)]
struct ModelInfo {
    users: usize,
    items: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(model: Arc<RecommendationModel>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new().wrap(cors).configure(configure(model.clone()))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

fn configure(model: Arc<RecommendationModel>) -> impl Fn(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(Recommender::new(model.clone())))
            .route("/api/recommend", web::post().to(recommend))
            .route("/model", web::get().to(model_info))
            .route("/healthz", web::get().to(health));
    }
}

async fn recommend(engine: web::Data<Recommender>, body: web::Bytes) -> ActixResult<HttpResponse> {
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(%e, "rejecting malformed request body");
            return Ok(bad_request("Invalid JSON input."));
        }
    };

    let user_id = match payload.get("user_id") {
        None => return Ok(bad_request("Missing 'user_id' in the request body.")),
        Some(value) => match positive_int(value) {
            Some(id) => id,
            None => return Ok(bad_request("'user_id' must be a positive integer.")),
        },
    };

    let top_n = match payload.get("top_n") {
        None => DEFAULT_TOP_N,
        Some(value) => match positive_int(value) {
            Some(n) => n as usize,
            None => return Ok(bad_request("'top_n' must be a positive integer.")),
        },
    };

    let recommendations = match engine.recommend(user_id, top_n) {
        Ok(items) => items,
        // An unknown user yields zero recommendations, not a failure.
        Err(Error::UserNotFound(id)) => {
            warn!(user_id = id, "user not found in the user-item matrix");
            Vec::new()
        }
        Err(e) => {
            error!(user_id, %e, "recommendation failed");
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    Ok(HttpResponse::Ok().json(RecommendResponse {
        user_id,
        top_n,
        recommendations,
    }))
}

async fn model_info(engine: web::Data<Recommender>) -> ActixResult<HttpResponse> {
    let model = engine.model();
    Ok(HttpResponse::Ok().json(ModelInfo {
        users: model.user_count(),
        items: model.item_count(),
    }))
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok"
    })))
}

/// Accepts only JSON integers > 0; floats and strings are rejected.
fn positive_int(value: &serde_json::Value) -> Option<u64> {
    value.as_i64().filter(|n| *n > 0).map(|n| n as u64)
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": message
    }))
}
