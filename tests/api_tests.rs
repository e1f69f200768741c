// tests/api_tests.rs
// DOCUMENTATION: HTTP integration tests over the in-memory backend
// PURPOSE: Exercise the full request path - routing, auth, facade, stores

use actix_web::{test, web, App};
use serde_json::{json, Value};

use hbnb_api::config::Config;
use hbnb_api::handlers;
use hbnb_api::services::HbnbFacade;

fn test_config() -> Config {
    Config {
        storage_backend: "memory".to_string(),
        database_url: String::new(),
        server_address: "127.0.0.1".to_string(),
        server_port: 0,
        environment: "development".to_string(),
        log_level: "warn".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_ttl_minutes: 60,
        db_max_connections: 1,
        db_connection_timeout: 5,
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    handlers::health_config(cfg);
    handlers::auth_config(cfg);
    handlers::users_config(cfg);
    handlers::amenities_config(cfg);
    handlers::places_config(cfg);
    handlers::reviews_config(cfg);
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(HbnbFacade::in_memory()))
                .app_data(web::Data::new(test_config()))
                .configure(routes),
        )
        .await
    };
}

/// Register a user and return the response body
macro_rules! register {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": $email,
                "password": "s3cret"
            }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

/// Log a user in and return the access token
macro_rules! login {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": $email, "password": "s3cret"}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test_app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage_backend"], "memory");
}

#[actix_web::test]
async fn test_register_login_and_protected() {
    let app = test_app!();
    let user = register!(app, "ada@example.com");
    assert_eq!(user["email"], "ada@example.com");
    assert!(user.get("password_hash").is_none());

    // Duplicate email is a conflict
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "password": "other"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Wrong password rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"email": "ada@example.com", "password": "wrong"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let token = login!(app, "ada@example.com");

    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    // Missing and garbage tokens rejected
    let req = test::TestRequest::get().uri("/api/v1/protected").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
    let req = test::TestRequest::get()
        .uri("/api/v1/protected")
        .insert_header(("Authorization", "Bearer nonsense"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}

#[actix_web::test]
async fn test_invalid_registration_rejected() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "password": "s3cret"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_user_update_rules() {
    let app = test_app!();
    let user = register!(app, "ada@example.com");
    register!(app, "eve@example.com");
    let user_id = user["id"].as_str().unwrap().to_string();
    let token = login!(app, "ada@example.com");
    let other_token = login!(app, "eve@example.com");

    // Unauthenticated update rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user_id))
        .set_json(json!({"first_name": "Grace"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Another user may not edit the profile
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user_id))
        .insert_header(bearer(&other_token))
        .set_json(json!({"first_name": "Grace"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    // Email changes are rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user_id))
        .insert_header(bearer(&token))
        .set_json(json!({"email": "new@example.com"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Self update works
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/users/{}", user_id))
        .insert_header(bearer(&token))
        .set_json(json!({"first_name": "Grace"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["first_name"], "Grace");
}

#[actix_web::test]
async fn test_place_crud_and_authorization() {
    let app = test_app!();
    register!(app, "owner@example.com");
    register!(app, "other@example.com");
    let owner_token = login!(app, "owner@example.com");
    let other_token = login!(app, "other@example.com");

    // Creating a place requires a token
    let place_body = json!({
        "title": "Seaside cabin",
        "description": "Two rooms, ocean view",
        "price": 120.0,
        "latitude": 43.3,
        "longitude": -1.98
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .set_json(&place_body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    // Out-of-range latitude rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&owner_token))
        .set_json(json!({
            "title": "Nowhere",
            "price": 10.0,
            "latitude": 91.0,
            "longitude": 0.0
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&owner_token))
        .set_json(&place_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let place: Value = test::read_body_json(resp).await;
    let place_id = place["id"].as_str().unwrap().to_string();

    // Listing and detail are public
    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/v1/places").to_request())
            .await;
    assert_eq!(resp.status(), 200);
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/places/{}", place_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["owner"]["email"], "owner@example.com");

    // Only the owner may update
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/places/{}", place_id))
        .insert_header(bearer(&other_token))
        .set_json(json!({"price": 1.0}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/places/{}", place_id))
        .insert_header(bearer(&owner_token))
        .set_json(json!({"price": 99.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["price"], 99.0);

    // Owner deletes the place
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/places/{}", place_id))
        .insert_header(bearer(&owner_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/places/{}", place_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_review_business_rules() {
    let app = test_app!();
    register!(app, "owner@example.com");
    register!(app, "guest@example.com");
    let owner_token = login!(app, "owner@example.com");
    let guest_token = login!(app, "guest@example.com");

    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&owner_token))
        .set_json(json!({
            "title": "Seaside cabin",
            "price": 120.0,
            "latitude": 43.3,
            "longitude": -1.98
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let place: Value = test::read_body_json(resp).await;
    let place_id = place["id"].as_str().unwrap().to_string();

    // Owner cannot review their own place
    let review_body = json!({"place_id": place_id, "text": "Lovely", "rating": 5});
    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&owner_token))
        .set_json(&review_body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Rating out of range rejected
    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&guest_token))
        .set_json(json!({"place_id": place_id, "text": "Lovely", "rating": 6}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Guest reviews the place
    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&guest_token))
        .set_json(&review_body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let review: Value = test::read_body_json(resp).await;
    let review_id = review["id"].as_str().unwrap().to_string();

    // One review per (user, place)
    let req = test::TestRequest::post()
        .uri("/api/v1/reviews")
        .insert_header(bearer(&guest_token))
        .set_json(&review_body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Review shows up under the place
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/places/{}/reviews", place_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let reviews: Value = test::read_body_json(resp).await;
    assert_eq!(reviews.as_array().unwrap().len(), 1);

    // Only the author may update or delete
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/reviews/{}", review_id))
        .insert_header(bearer(&owner_token))
        .set_json(json!({"rating": 1}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/reviews/{}", review_id))
        .insert_header(bearer(&guest_token))
        .set_json(json!({"rating": 4}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["rating"], 4);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/reviews/{}", review_id))
        .insert_header(bearer(&guest_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);
}

#[actix_web::test]
async fn test_amenity_lifecycle() {
    let app = test_app!();
    register!(app, "owner@example.com");
    let owner_token = login!(app, "owner@example.com");

    // Create and conflict on duplicate name
    let req = test::TestRequest::post()
        .uri("/api/v1/amenities")
        .set_json(json!({"name": "Wi-Fi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let amenity: Value = test::read_body_json(resp).await;
    let amenity_id = amenity["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/v1/amenities")
        .set_json(json!({"name": "Wi-Fi"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 409);

    // Attach to a place and see it in the detail response
    let req = test::TestRequest::post()
        .uri("/api/v1/places")
        .insert_header(bearer(&owner_token))
        .set_json(json!({
            "title": "Seaside cabin",
            "price": 120.0,
            "latitude": 43.3,
            "longitude": -1.98
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let place: Value = test::read_body_json(resp).await;
    let place_id = place["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/places/{}/amenities", place_id))
        .insert_header(bearer(&owner_token))
        .set_json(json!({"id": amenity_id}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/places/{}", place_id))
            .to_request(),
    )
    .await;
    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["amenities"][0]["name"], "Wi-Fi");

    // Rename, then delete
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/amenities/{}", amenity_id))
        .set_json(json!({"name": "Fast Wi-Fi"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/amenities/{}", amenity_id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    // Detail no longer lists the amenity
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/places/{}", place_id))
            .to_request(),
    )
    .await;
    let detail: Value = test::read_body_json(resp).await;
    assert!(detail["amenities"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/amenities/{}", amenity_id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
