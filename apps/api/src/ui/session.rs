//! Page state: the two inputs plus an idle / loading / result / error view.

use tracing::warn;

use crate::models::analysis::AnalysisResult;
use crate::ui::client::{AnalysisApi, ProxyClientError};
use crate::ui::example::{EXAMPLE_JOB_DESCRIPTION, EXAMPLE_RESUME};

pub const MISSING_INPUT_MESSAGE: &str = "Please provide both a job description and a resume.";
pub const REQUEST_FAILED_MESSAGE: &str =
    "Failed to analyze the documents. The AI model may be overloaded. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready(AnalysisResult),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Inputs accepted; the view is now `Loading`.
    Started,
    /// An input was empty; the view is now `Failed` and nothing was sent.
    MissingInput,
    /// A request is already in flight.
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub job_description: String,
    pub resume_text: String,
    pub view: ViewState,
}

impl Session {
    pub fn new(job_description: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            resume_text: resume_text.into(),
            view: ViewState::Idle,
        }
    }

    /// Inputs pre-filled with the sample job description and resume.
    pub fn with_example() -> Self {
        Self::new(EXAMPLE_JOB_DESCRIPTION, EXAMPLE_RESUME)
    }

    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }

    /// Local guard before any network call. Clears the previous result.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            return SubmitOutcome::Busy;
        }
        if self.job_description.trim().is_empty() || self.resume_text.trim().is_empty() {
            self.view = ViewState::Failed(MISSING_INPUT_MESSAGE.to_string());
            return SubmitOutcome::MissingInput;
        }
        self.view = ViewState::Loading;
        SubmitOutcome::Started
    }

    /// Settles a `Loading` view. Ignored in any other state.
    pub fn complete(&mut self, outcome: Result<AnalysisResult, ProxyClientError>) {
        if !self.is_loading() {
            return;
        }
        self.view = match outcome {
            Ok(result) => ViewState::Ready(result),
            Err(e) => {
                warn!("Analysis request failed: {e}");
                ViewState::Failed(REQUEST_FAILED_MESSAGE.to_string())
            }
        };
    }

    /// Full submit cycle against `api`.
    pub async fn submit(&mut self, api: &dyn AnalysisApi) -> SubmitOutcome {
        let outcome = self.begin_submit();
        if outcome == SubmitOutcome::Started {
            let result = api.analyze(&self.job_description, &self.resume_text).await;
            self.complete(result);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct StubApi {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubApi {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AnalysisApi for StubApi {
        async fn analyze(
            &self,
            _job_description: &str,
            _resume_text: &str,
        ) -> Result<AnalysisResult, ProxyClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ProxyClientError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                })
            } else {
                let mut result = AnalysisResult::failsafe();
                result.overall_score = 66;
                Ok(result)
            }
        }
    }

    #[test]
    fn test_begin_submit_rejects_empty_inputs() {
        let mut session = Session::new("Rust role", "  ");
        assert_eq!(session.begin_submit(), SubmitOutcome::MissingInput);
        assert_eq!(
            session.view,
            ViewState::Failed(MISSING_INPUT_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_begin_submit_while_loading_is_busy() {
        let mut session = Session::new("jd", "cv");
        assert_eq!(session.begin_submit(), SubmitOutcome::Started);
        assert!(session.is_loading());
        assert_eq!(session.begin_submit(), SubmitOutcome::Busy);
        assert!(session.is_loading());
    }

    #[test]
    fn test_begin_submit_clears_previous_result() {
        let mut session = Session::new("jd", "cv");
        session.view = ViewState::Ready(AnalysisResult::failsafe());
        assert_eq!(session.begin_submit(), SubmitOutcome::Started);
        assert_eq!(session.view, ViewState::Loading);
    }

    #[test]
    fn test_complete_ignored_unless_loading() {
        let mut session = Session::new("jd", "cv");
        session.complete(Ok(AnalysisResult::failsafe()));
        assert_eq!(session.view, ViewState::Idle);
    }

    #[tokio::test]
    async fn test_submit_success_stores_result() {
        let api = StubApi::new(false);
        let mut session = Session::new("jd", "cv");

        assert_eq!(session.submit(&api).await, SubmitOutcome::Started);
        match &session.view {
            ViewState::Ready(result) => assert_eq!(result.overall_score, 66),
            other => panic!("expected result, got {other:?}"),
        }
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_shows_retry_message() {
        let api = StubApi::new(true);
        let mut session = Session::new("jd", "cv");

        session.submit(&api).await;
        assert_eq!(
            session.view,
            ViewState::Failed(REQUEST_FAILED_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_submit_missing_input_makes_no_call() {
        let api = StubApi::new(false);
        let mut session = Session::new("", "cv");

        assert_eq!(session.submit(&api).await, SubmitOutcome::MissingInput);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_with_example_fills_both_inputs() {
        let session = Session::with_example();
        assert!(session.job_description.contains("Senior Frontend Engineer"));
        assert!(session.resume_text.contains("John Doe"));
        assert_eq!(session.view, ViewState::Idle);
    }
}
