//! End-to-end tests against a running server

use reqwest::{redirect::Policy, Client, StatusCode};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_author_and_list() {
    let client = client();
    let marker = format!("Hugo-{}", uuid::Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!("nom={}&prenom=Victor", marker))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/authors");

    let body = client
        .get(format!("{}/authors", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains(&marker));
    assert!(body.contains("Victor"));
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_author_redirects() {
    let response = client()
        .get(format!("{}/authors/delete/{}", BASE_URL, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()["location"], "/authors");
}

#[tokio::test]
#[ignore]
async fn test_home_page() {
    let response = client()
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("author-count"));
    assert!(body.contains("book-count"));
}

#[tokio::test]
#[ignore]
async fn test_books_page_lists_new_book() {
    let client = client();
    let title = format!("Titre-{}", uuid::Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!("titre={}&auteur=&resume=&isbn=", title))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FOUND);

    let body = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains(&title));
}
