use super::*;
use crate::config::Config;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let engine = web::Data::new(config.engine()?);
        let janitor = engine.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(crate::SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                janitor.sweep().await;
            }
        });
        log::info!("starting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(engine.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

/// Every endpoint, served bare and again under `/api`.
/// Expects a `web::Data<Engine>` on the app.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| {
        let body = Failure::from(e.to_string());
        actix_web::error::InternalError::from_response(e, HttpResponse::BadRequest().json(body))
            .into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|e, _| {
        let body = Failure::from(e.to_string());
        actix_web::error::InternalError::from_response(e, HttpResponse::BadRequest().json(body))
            .into()
    }))
    .service(web::scope("/api").configure(endpoints))
    .configure(endpoints);
}

#[rustfmt::skip]
fn endpoints(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/stats", web::get().to(handlers::stats))
        .route("/animals", web::get().to(handlers::animals))
        .route("/history", web::get().to(handlers::history))
        .service(
            web::scope("/game")
                .route("/start", web::post().to(handlers::start))
                .route("/answer", web::post().to(handlers::answer))
                .route("/guess-result", web::post().to(handlers::guess_result))
                .route("/learn", web::post().to(handlers::learn))
                .route("/end", web::post().to(handlers::end)),
        )
        .service(
            web::scope("/tree")
                .route("/path", web::get().to(handlers::path))
                .route("/data", web::get().to(handlers::data))
                .route("/display", web::get().to(handlers::display)),
        );
}
