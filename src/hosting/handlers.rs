use super::*;
use crate::game::Engine;
use crate::game::GameError;
use crate::game::Kind;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "healthy",
        message: "pseudoqui is running",
    })
}
pub async fn start(engine: web::Data<Engine>) -> impl Responder {
    match engine.start().await {
        Ok(turn) => HttpResponse::Ok().json(Started {
            success: true,
            message: "New game started",
            turn,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn answer(
    engine: web::Data<Engine>,
    query: web::Query<SessionQuery>,
    req: web::Json<AnswerRequest>,
) -> impl Responder {
    match engine.answer(query.id(), &req.answer).await {
        Ok(turn) => HttpResponse::Ok().json(Answered {
            success: true,
            turn,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn guess_result(
    engine: web::Data<Engine>,
    query: web::Query<SessionQuery>,
    req: web::Json<GuessResult>,
) -> impl Responder {
    let GuessResult {
        was_correct,
        actual_animal,
    } = req.into_inner();
    match engine.judge(query.id(), was_correct, actual_animal).await {
        Ok(warning) => HttpResponse::Ok().json(Judged {
            success: true,
            persisted: warning.is_none(),
            warning,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn learn(
    engine: web::Data<Engine>,
    query: web::Query<SessionQuery>,
    req: web::Json<LearnRequest>,
) -> impl Responder {
    match engine
        .learn(query.id(), &req.new_animal, &req.question, &req.answer_for_new)
        .await
    {
        Ok(learned) => HttpResponse::Ok().json(Taught {
            success: true,
            message: format!("Learned new animal: {}", learned.animal),
            tree_updated: true,
            persisted: learned.warning.is_none(),
            warning: learned.warning,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn end(engine: web::Data<Engine>, query: web::Query<SessionQuery>) -> impl Responder {
    match engine.end(query.id()).await {
        Ok(session) => HttpResponse::Ok().json(Ended {
            success: true,
            session,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn stats(engine: web::Data<Engine>) -> impl Responder {
    HttpResponse::Ok().json(Statistics {
        success: true,
        statistics: engine.report().await,
    })
}
/// The newest finished games, oldest first.
pub async fn history(engine: web::Data<Engine>) -> impl Responder {
    let games = engine.history(crate::RECENT_GAMES).await;
    HttpResponse::Ok().json(Recent {
        success: true,
        count: games.len(),
        games,
    })
}
pub async fn animals(engine: web::Data<Engine>) -> impl Responder {
    let animals = engine.animals().await;
    HttpResponse::Ok().json(Animals {
        success: true,
        count: animals.len(),
        animals,
    })
}
pub async fn path(engine: web::Data<Engine>, query: web::Query<SessionQuery>) -> impl Responder {
    match engine.path(query.id()).await {
        Ok(path) => HttpResponse::Ok().json(Path {
            success: true,
            path,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn data(engine: web::Data<Engine>) -> impl Responder {
    match engine.shape().await {
        Ok(tree) => HttpResponse::Ok().json(Data {
            success: true,
            tree,
        }),
        Err(e) => refuse(e),
    }
}
pub async fn display(engine: web::Data<Engine>) -> impl Responder {
    HttpResponse::Ok().json(Drawing {
        success: true,
        tree: engine.render().await,
    })
}

fn refuse(e: GameError) -> HttpResponse {
    log::debug!("refused: {}", e);
    let body = Failure::from(e.to_string());
    match e.kind() {
        Kind::Validation => HttpResponse::BadRequest().json(body),
        Kind::Sequence => HttpResponse::Conflict().json(body),
        Kind::Missing => HttpResponse::NotFound().json(body),
        Kind::Structure => HttpResponse::Conflict().json(body),
    }
}
