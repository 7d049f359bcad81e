use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web;
use pseudoqui::game::Engine;
use pseudoqui::hosting::routes;
use pseudoqui::save::Store;
use pseudoqui::tree::Branch;
use pseudoqui::tree::Lesson;
use pseudoqui::tree::Tree;
use serde_json::Value;
use serde_json::json;

macro_rules! app {
    ($tree:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Engine::memory($tree)))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn dog_becomes_dog_or_cat() {
    let app = app!(Tree::leaf("Dog"));
    let req = test::TestRequest::post().uri("/game/start").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "New game started");
    assert_eq!(body["reached_guess"], true);
    assert_eq!(body["guess"], "Dog");
    assert_eq!(body["questions_asked"], 0);
    assert!(body.get("question").is_none());
    assert!(body["session_id"].is_string());

    let req = test::TestRequest::post()
        .uri("/game/guess-result")
        .set_json(json!({ "was_correct": false, "actual_animal": "Cat" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::post()
        .uri("/game/learn")
        .set_json(json!({ "new_animal": "Cat", "question": "Does it bark?", "answer_for_new": "no" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Learned new animal: Cat");
    assert_eq!(body["tree_updated"], true);

    let req = test::TestRequest::get().uri("/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    let tree = &body["statistics"]["tree"];
    assert_eq!(tree["leaf_count"], 2);
    assert_eq!(tree["height"], 1);
    assert_eq!(tree["total_nodes"], 3);
    assert_eq!(tree["average_depth"], 1.0);
    assert_eq!(tree["balance_factor"], 0.0);
    let games = &body["statistics"]["games"];
    assert_eq!(games["total"], 1);
    assert_eq!(games["correct_guesses"], 0);
    assert_eq!(games["incorrect_guesses"], 1);
    assert_eq!(games["success_rate"], 0.0);
    assert_eq!(games["average_questions_per_game"], 0.0);

    let req = test::TestRequest::get().uri("/tree/data").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["tree"]["data"], "Does it bark?");
    assert_eq!(body["tree"]["is_leaf"], false);
    assert_eq!(body["tree"]["left"]["data"], "Dog");
    assert_eq!(body["tree"]["right"]["data"], "Cat");
    assert_eq!(body["tree"]["right"]["is_leaf"], true);

    let req = test::TestRequest::get().uri("/tree/path").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["path"], json!([{ "question": "Is it a Dog?", "answer": "Guess" }]));

    let req = test::TestRequest::post().uri("/game/end").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["session"], json!({ "questions_asked": 0, "correct": false }));
}

#[actix_web::test]
async fn maybe_is_refused() {
    let app = app!(Tree::default());
    let req = test::TestRequest::post().uri("/api/game/start").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["question"], "Is it a mammal?");
    assert_eq!(body["reached_guess"], false);

    let req = test::TestRequest::post()
        .uri("/api/game/answer")
        .set_json(json!({ "answer": "maybe" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/game/answer")
        .set_json(json!({ "answer": "Oui" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["questions_asked"], 1);
    assert_eq!(body["question"], "Does it live in water?");
}

#[actix_web::test]
async fn out_of_sequence_and_missing() {
    let app = app!(Tree::default());
    let req = test::TestRequest::post()
        .uri("/game/answer")
        .set_json(json!({ "answer": "yes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post().uri("/game/start").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/game/learn")
        .set_json(json!({ "new_animal": "Cat", "question": "Meows?", "answer_for_new": "yes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/game/learn")
        .set_json(json!({ "question": "Meows?", "answer_for_new": "yes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Animal name is required");

    let req = test::TestRequest::post()
        .uri("/game/guess-result")
        .set_payload("not json")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn tokens_keep_players_apart() {
    let app = app!(Tree::default());
    let req = test::TestRequest::post().uri("/game/start").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;
    let req = test::TestRequest::post().uri("/game/start").to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;
    let first = first["session_id"].as_str().unwrap().to_string();
    assert_ne!(Some(first.as_str()), second["session_id"].as_str());

    let req = test::TestRequest::post()
        .uri(&format!("/game/answer?session_id={}", first))
        .set_json(json!({ "answer": "no" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["session_id"], first.as_str());
    assert_eq!(body["question"], "Does it have feathers?");

    let req = test::TestRequest::post()
        .uri("/game/answer")
        .set_json(json!({ "answer": "yes" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["session_id"], second["session_id"]);
    assert_eq!(body["question"], "Does it live in water?");

    let req = test::TestRequest::post()
        .uri("/game/end?session_id=00000000-0000-0000-0000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/game/end?session_id=garbage")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn read_only_views() {
    let app = app!(Tree::default());
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/animals").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 23);
    assert_eq!(body["animals"][0], "Whale");

    let req = test::TestRequest::get().uri("/tree/display").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    let text = body["tree"].as_str().unwrap();
    assert!(text.starts_with("Is it a mammal?\n├──YES → Does it live in water?"));
    assert_eq!(text.lines().count(), 45);

    let req = test::TestRequest::get().uri("/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["statistics"]["tree"]["height"], 6);
    assert_eq!(body["statistics"]["games"]["success_rate"], 0.0);
}

#[actix_web::test]
async fn unsaved_results_are_flagged() {
    let dir = std::env::temp_dir()
        .join("pseudoqui")
        .join(format!("api-blocked-{}", pseudoqui::ID::<()>::default()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("occupied");
    std::fs::write(&file, "").unwrap();
    let ttl = std::time::Duration::from_secs(60);
    let engine = Engine::new(Store::disk(&file), ttl, || Tree::leaf("Dog")).unwrap();
    let app = test::init_service(App::new().app_data(web::Data::new(engine)).configure(routes)).await;

    let req = test::TestRequest::post().uri("/game/start").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/game/guess-result")
        .set_json(json!({ "was_correct": false }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["persisted"], false);
    assert!(body["warning"].is_string());

    let req = test::TestRequest::post()
        .uri("/game/learn")
        .set_json(json!({ "new_animal": "Cat", "question": "Does it bark?", "answer_for_new": "no" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["tree_updated"], true);
    assert_eq!(body["persisted"], false);
    assert!(body["warning"].as_str().unwrap().contains("not saved"));

    let req = test::TestRequest::get().uri("/animals").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["animals"], json!(["Dog", "Cat"]));
    std::fs::remove_dir_all(&dir).ok();
}

#[actix_web::test]
async fn finished_games_are_listed() {
    let app = app!(Tree::leaf("Dog"));
    let req = test::TestRequest::get().uri("/api/history").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 0);

    let req = test::TestRequest::post().uri("/game/start").to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/game/guess-result")
        .set_json(json!({ "was_correct": true }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/history").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 1);
    let game = &body["games"][0];
    assert_eq!(game["animal_guessed"], "Dog");
    assert_eq!(game["guessed_correctly"], true);
    assert_eq!(game["learned_new_animal"], false);
    assert_eq!(game["questions_asked"], 0);
    assert!(game["started_at"].as_u64().unwrap() <= game["ended_at"].as_u64().unwrap());
}

#[actix_web::test]
async fn runaway_tree_is_not_nested() {
    let mut tree = Tree::leaf("A0");
    let mut leaf = tree.root();
    let mut above = None;
    for i in 1..=pseudoqui::MAX_SHAPE_DEPTH + 1 {
        let lesson = Lesson::new(format!("A{}", i), format!("Q{}?", i), Branch::Yes);
        let question = tree.learn(leaf, above, lesson).unwrap();
        above = Some(question);
        leaf = tree.child(question, Branch::No).unwrap();
    }
    let app = app!(tree);
    let req = test::TestRequest::get().uri("/tree/data").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);

    let req = test::TestRequest::get().uri("/tree/display").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
}
