mod support;

use actix_web::{test, web, App};
use rps_backend::{cors_middleware, routes, AppState};

#[actix_web::test]
async fn preflight_allows_configured_origin_only() {
    let origins = vec!["http://localhost:3000".to_string()];
    let app = test::init_service(
        App::new()
            .wrap(cors_middleware(&origins))
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/play")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "http://localhost:3000"
    );

    let req = test::TestRequest::get()
        .uri("/api/state")
        .insert_header(("Origin", "http://evil.example"))
        .to_request();
    match test::try_call_service(&app, req).await {
        Ok(resp) => assert!(resp
            .headers()
            .get("access-control-allow-origin")
            .is_none()),
        Err(err) => assert!(err.as_response_error().status_code().is_client_error()),
    }
}
