//! Handler tests driving the full router with in-process requests.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{
    router::router,
    state::AppState,
    storage::{test_support::memory_storage, PhotoStorage},
};

mod page;

const FORM: &str = "application/x-www-form-urlencoded";
const PASSWORD: &str = "correct+horse+battery";

/// Test database plus a router sharing its connection.
struct TestApp {
    test: TestContext,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_storage(memory_storage()).await
    }

    async fn with_storage(storage: PhotoStorage) -> Self {
        let test = TestBuilder::new().with_bird_tables().build().await.unwrap();
        let db: DatabaseConnection = test.db.clone().unwrap();

        let app = router()
            .with_state(AppState::new(db, storage))
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        Self { test, app }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::get(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, cookie: Option<&str>, body: &str) -> Response {
        let mut request = Request::post(uri).header(CONTENT_TYPE, FORM);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Signs up `username` and returns the session cookie of the new login.
    async fn sign_up(&self, username: &str) -> String {
        let body = format!(
            "username={}&password1={}&password2={}",
            username, PASSWORD, PASSWORD
        );
        let response = self.post_form("/accounts/signup/", None, &body).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        session_cookie(&response)
    }

    /// Creates a bird through the form and returns its id.
    async fn create_bird(&self, cookie: &str, name: &str) -> i32 {
        let body = format!("name={}&breed=Finch&description=&age=2", name);
        let response = self.post_form("/birds/create/", Some(cookie), &body).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        location(&response)
            .trim_start_matches("/birds/")
            .trim_end_matches('/')
            .parse()
            .unwrap()
    }

    async fn count<E>(&mut self, entity: E) -> u64
    where
        E: sea_orm::EntityTrait,
        E::Model: Sync,
    {
        self.test.count(entity).await.unwrap()
    }
}

fn session_cookie(response: &Response) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("response sets a session cookie")
        .to_str()
        .unwrap();

    header.split(';').next().unwrap().to_string()
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("response is a redirect")
        .to_str()
        .unwrap()
        .to_string()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
