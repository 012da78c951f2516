//! Axum route handlers for the server-rendered page.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::ui::render::render_page;
use crate::ui::session::Session;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Present (any value) → pre-fill the example texts.
    pub example: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
}

/// GET /
pub async fn handle_index(Query(query): Query<IndexQuery>) -> Result<Html<String>, AppError> {
    let session = if query.example.is_some() {
        Session::with_example()
    } else {
        Session::default()
    };
    Ok(Html(render_page(&session)?))
}

/// POST /
///
/// Runs one submit cycle through the proxy client and renders where it settled.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Html<String>, AppError> {
    let mut session = Session::new(form.job_description, form.resume_text);
    let outcome = session.submit(state.proxy.as_ref()).await;
    debug!(?outcome, "Page submit settled");
    Ok(Html(render_page(&session)?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::models::analysis::{AnalysisResult, Verdict};
    use crate::test_support::{test_app, StubLlm};
    use crate::ui::client::{AnalysisApi, ProxyClientError};
    use crate::ui::session::{MISSING_INPUT_MESSAGE, REQUEST_FAILED_MESSAGE};

    struct FixedApi(Option<AnalysisResult>);

    #[async_trait]
    impl AnalysisApi for FixedApi {
        async fn analyze(&self, _: &str, _: &str) -> Result<AnalysisResult, ProxyClientError> {
            self.0.clone().ok_or(ProxyClientError::Status {
                status: 500,
                body: String::new(),
            })
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn app_with(api: FixedApi) -> axum::Router {
        test_app(Arc::new(StubLlm::replying("{}")), Arc::new(api))
    }

    #[tokio::test]
    async fn test_index_renders_empty_form() {
        let response = app_with(FixedApi(None))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Analyze Fit"));
        assert!(!html.contains("InnovateTech"));
    }

    #[tokio::test]
    async fn test_index_example_prefills_inputs() {
        let response = app_with(FixedApi(None))
            .oneshot(
                Request::builder()
                    .uri("/?example=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("InnovateTech"));
        assert!(html.contains("John Doe"));
    }

    #[tokio::test]
    async fn test_submit_renders_result() {
        let mut result = AnalysisResult::failsafe();
        result.overall_score = 73;
        result.verdict = Verdict::Consider;

        let response = app_with(FixedApi(Some(result)))
            .oneshot(form_post("job_description=Rust+role&resume_text=5+years+Rust"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("verdict-consider"));
        assert!(html.contains(">73<"));
        assert!(html.contains("Rust role"));
    }

    #[tokio::test]
    async fn test_submit_with_empty_input_shows_local_error() {
        let response = app_with(FixedApi(None))
            .oneshot(form_post("job_description=&resume_text=cv"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(MISSING_INPUT_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_proxy_failure_shows_retry_message() {
        let response = app_with(FixedApi(None))
            .oneshot(form_post("job_description=jd&resume_text=cv"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(REQUEST_FAILED_MESSAGE));
    }
}
