use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::collections::HashMap;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: Config, casino: Arc<Casino>) -> Result<(), std::io::Error> {
        let state = web::Data::from(casino);
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/health", web::get().to(health))
                .route("/websockets", web::get().to(enter))
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

async fn health(casino: web::Data<Casino>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "waiting": casino.waiting().await,
        "matches": casino.matches().await,
    }))
}

async fn enter(
    casino: web::Data<Casino>,
    query: web::Query<HashMap<String, String>>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let join = match Join::try_from(&query.into_inner()) {
        Ok(join) => join,
        Err(e) => return HttpResponse::BadRequest().body(e.to_string()).map_into_right_body(),
    };
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            match casino.into_inner().bridge(join, session, stream).await {
                Ok(()) => response.map_into_left_body(),
                Err(e) => HttpResponse::BadRequest()
                    .body(e.to_string())
                    .map_into_right_body(),
            }
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
