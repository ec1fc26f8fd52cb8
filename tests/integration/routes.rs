//! Route tests running the full router against the in-memory store

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};
use tower::ServiceExt;

use book_shop_api::services::users::verify_password;

use crate::common::{app, get, send, MemoryStore};

fn titles(body: &Value) -> Vec<String> {
    let mut titles: Vec<String> = body
        .as_array()
        .expect("book list")
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    titles.sort();
    titles
}

fn shop() -> MemoryStore {
    let store = MemoryStore::default();
    store.seed_book("Dune", "Frank Herbert", "9780441013593", Some("A classic"));
    store.seed_book("Dune Messiah", "Frank Herbert", "9780593098233", None);
    store.seed_book("The Hobbit", "J.R.R. Tolkien", "9780547928227", None);
    store.seed_book("The Hobbit", "J.R.R. Tolkien", "9780261102217", Some("Illustrated"));
    store
}

#[tokio::test]
async fn test_list_all_books() {
    let app = app(&shop());

    for uri in ["/books", "/books/all"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_book_json_shape() {
    let store = MemoryStore::default();
    let id = store.seed_book("Dune", "Frank Herbert", "9780441013593", Some("A classic"));
    let (_, body) = get(&app(&store), "/books").await;

    assert_eq!(
        body,
        json!([{
            "_id": id.to_hex(),
            "title": "Dune",
            "author": "Frank Herbert",
            "isbn": "9780441013593",
            "review": "A classic",
        }])
    );
}

#[tokio::test]
async fn test_exact_match_lookups() {
    let app = app(&shop());

    let (status, body) = get(&app, "/books/author/Frank%20Herbert").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Dune", "Dune Messiah"]);

    let (_, body) = get(&app, "/books/title/The%20Hobbit").await;
    assert_eq!(titles(&body), vec!["The Hobbit", "The Hobbit"]);

    let (_, body) = get(&app, "/books/isbn/9780441013593").await;
    assert_eq!(titles(&body), vec!["Dune"]);

    // Exact, case-sensitive: no prefix or case-folded matches
    let (_, body) = get(&app, "/books/title/Dune%20Mess").await;
    assert_eq!(body, json!([]));
    let (_, body) = get(&app, "/books/author/frank%20herbert").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_routes_match_plain_lookups() {
    let app = app(&shop());

    for (plain, search) in [
        ("/books/isbn/9780261102217", "/books/search/isbn/9780261102217"),
        ("/books/author/J.R.R.%20Tolkien", "/books/search/author/J.R.R.%20Tolkien"),
        ("/books/title/Dune", "/books/search/title/Dune"),
        ("/books/title/Missing", "/books/search/title/Missing"),
    ] {
        let (plain_status, plain_body) = get(&app, plain).await;
        let (search_status, search_body) = get(&app, search).await;
        assert_eq!(plain_status, StatusCode::OK);
        assert_eq!(search_status, StatusCode::OK);
        assert_eq!(plain_body, search_body, "{} vs {}", plain, search);
    }
}

#[tokio::test]
async fn test_get_review() {
    let store = MemoryStore::default();
    let reviewed = store.seed_book("Dune", "Frank Herbert", "1", Some("A classic"));
    let unreviewed = store.seed_book("Emma", "Jane Austen", "2", None);
    let app = app(&store);

    let (status, body) = get(&app, &format!("/books/{}/review", reviewed.to_hex())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("A classic"));

    let (status, body) = get(&app, &format!("/books/{}/review", unreviewed.to_hex())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(""));

    let (status, body) = get(&app, &format!("/books/{}/review", ObjectId::new().to_hex())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book not found" }));
}

#[tokio::test]
async fn test_malformed_id_is_internal_error() {
    let app = app(&shop());

    let (status, body) = get(&app, "/books/12345/review").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/books/12345/review",
        Some(json!({ "review": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_then_read_review() {
    let store = MemoryStore::default();
    let id = store.seed_book("Dune", "Frank Herbert", "1", Some("old"));
    let app = app(&store);
    let uri = format!("/books/{}/review", id.to_hex());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "review": "X" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Book review updated successfully" }));

    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, json!("X"));
}

#[tokio::test]
async fn test_delete_clears_review_but_keeps_book() {
    let store = MemoryStore::default();
    let id = store.seed_book("Dune", "Frank Herbert", "1", Some("A classic"));
    let app = app(&store);
    let uri = format!("/books/{}/review", id.to_hex());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Book review deleted successfully" }));

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(""));

    let (_, body) = get(&app, "/books").await;
    assert_eq!(body[0]["review"], json!(""));
}

#[tokio::test]
async fn test_review_mutations_on_missing_book() {
    let app = app(&shop());
    let uri = format!("/books/{}/review", ObjectId::new().to_hex());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "review": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_then_login() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Registration successful" }));

    let stored = store.user("ada@example.com").unwrap();
    assert_ne!(stored.password, "s3cret");
    assert!(verify_password(&stored.password, "s3cret"));

    let login = |email: &str, password: &str| json!({ "email": email, "password": password });

    let (status, body) = send(&app, Method::POST, "/login", Some(login("ada@example.com", "s3cret"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Login successful" }));

    let (status, body) = send(&app, Method::POST, "/login", Some(login("ada@example.com", "wrong"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid email or password" }));

    let (status, _) = send(&app, Method::POST, "/login", Some(login("bob@example.com", "s3cret"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_registration_leaves_original_untouched() {
    let store = MemoryStore::default();
    let app = app(&store);

    send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "s3cret" })),
    )
    .await;
    let original = store.user("ada@example.com").unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "name": "Mallory", "email": "ada@example.com", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Email already registered" }));

    assert_eq!(store.user_count(), 1);
    assert_eq!(store.user("ada@example.com").unwrap(), original);
}

#[tokio::test]
async fn test_incomplete_bodies_are_not_validated() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({ "email": "ada@example.com", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Registration successful" }));
    assert_eq!(store.user("ada@example.com").unwrap().name, "");

    let (status, _) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "ada@example.com", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::POST, "/login", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");

    let uri = format!("/books/{}/review", ObjectId::new().to_hex());
    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Book not found");
}

#[tokio::test]
async fn test_put_without_review_clears_it() {
    let store = MemoryStore::default();
    let id = store.seed_book("Dune", "Frank Herbert", "1", Some("A classic"));
    let app = app(&store);
    let uri = format!("/books/{}/review", id.to_hex());

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, json!(""));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app(&MemoryStore::default());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_datastore_failure_is_generic_internal_error() {
    let store = shop();
    let app = app(&store);
    store.go_offline();

    for uri in ["/books", "/books/author/Frank%20Herbert", "/books/search/isbn/1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({ "email": "ada@example.com", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");

    store.go_offline();
    let (status, _) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
