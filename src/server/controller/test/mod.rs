use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{
    config::Config,
    model::user::CreateUserParam,
    render::Templates,
    router::router,
    service::user::FixedUserSampler,
    state::AppState,
};


const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Name and age every sample user created through the router gets.
const SAMPLE_NAME: &str = "Ada";
const SAMPLE_AGE: i32 = 36;

/// Builds the full application router over the given database with embedded templates and a
/// fixed user sampler.
fn app(db: &DatabaseConnection) -> Router {
    let templates = Templates::embedded().unwrap();
    let sampler = FixedUserSampler(CreateUserParam {
        name: SAMPLE_NAME.to_string(),
        age: SAMPLE_AGE,
    });

    router(&Config::default()).with_state(AppState::new(
        db.clone(),
        Arc::new(templates),
        Arc::new(sampler),
    ))
}

/// Sends one request through the router and returns the status, content type, and body text.
async fn send(
    app: Router,
    method: Method,
    uri: &str,
    form: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(form) => {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    send(app, Method::GET, uri, None).await
}

async fn post_form(app: Router, uri: &str, form: &str) -> (StatusCode, Option<String>, String) {
    send(app, Method::POST, uri, Some(form)).await
}

fn is_html(content_type: &Option<String>) -> bool {
    content_type
        .as_deref()
        .is_some_and(|value| value.starts_with("text/html"))
}
