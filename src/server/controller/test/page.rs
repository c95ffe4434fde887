use super::*;

#[tokio::test]
async fn home_is_public() {
    let app = TestApp::new().await;

    let response = app.get("/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Sign Up"));
}

#[tokio::test]
async fn about_answers_with_and_without_trailing_slash() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/about", None).await.status(), StatusCode::OK);
    assert_eq!(app.get("/about/", None).await.status(), StatusCode::OK);
}

/// Tests that the navigation switches once logged in.
#[tokio::test]
async fn navigation_reflects_login() {
    let app = TestApp::new().await;
    let cookie = app.sign_up("alice").await;

    let body = body_text(app.get("/", Some(&cookie)).await).await;

    assert!(body.contains("Logout"));
    assert!(body.contains("Add a Bird"));
}
