//! Analysis session: the state behind the analysis form.
//!
//! A session holds at most one result and allows one submission in flight.
//! Submitting clears the previous result; [`AnalysisSession::reset`] discards
//! it without starting a new analysis.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::Instrument;
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, AnalysisResult, Analyzer, Classification};
use crate::error::SessionError;
use crate::validation::RequestValidator;

/// Kind of notification raised after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// Notification data for the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
    /// How long the front end should keep it visible.
    pub duration: Duration,
}

impl Notice {
    pub fn complete() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Analysis Complete",
            description: "The content has been analyzed successfully.",
            duration: Duration::from_millis(3000),
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NoticeKind::Destructive,
            title: "Analysis Failed",
            description: "There was an error processing your request.",
            duration: Duration::from_millis(5000),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}

#[derive(Debug, Default)]
struct SessionState {
    result: Option<AnalysisResult>,
    is_analyzing: bool,
}

/// Holds the current result and the in-flight flag.
pub struct AnalysisSession {
    analyzer: Arc<dyn Analyzer>,
    validator: RequestValidator,
    state: Mutex<SessionState>,
}

impl AnalysisSession {
    pub fn new(analyzer: Arc<dyn Analyzer>, validator: RequestValidator) -> Self {
        Self {
            analyzer,
            validator,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Submit a request for analysis.
    ///
    /// Returns `Busy` while another submission is running and `Rejected` for
    /// requests that fail validation; neither reaches the analyzer nor
    /// touches the current result. Analyzer failures are logged and reported
    /// through the returned notice.
    pub async fn submit(&self, request: AnalysisRequest) -> Result<Notice, SessionError> {
        let _in_flight = self.begin(&request)?;

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("analysis", %request_id);
        let outcome = self
            .analyzer
            .analyze(&request)
            .instrument(span.clone())
            .await;

        let _entered = span.enter();
        match outcome {
            Ok(result) => {
                tracing::info!(
                    classification = %result.classification,
                    confidence = result.confidence_score,
                    "Analysis complete"
                );
                self.lock().result = Some(result);
                Ok(Notice::complete())
            }
            Err(e) => {
                tracing::error!("Analysis failed: {}", e);
                Ok(Notice::failed())
            }
        }
    }

    /// Discard the current result.
    pub fn reset(&self) {
        self.lock().result = None;
    }

    pub fn is_analyzing(&self) -> bool {
        self.lock().is_analyzing
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.lock().result.clone()
    }

    /// Verdict of the current result, `Unknown` when there is none.
    pub fn classification(&self) -> Classification {
        self.lock()
            .result
            .as_ref()
            .map(|r| r.classification)
            .unwrap_or_default()
    }

    fn begin(&self, request: &AnalysisRequest) -> Result<InFlight<'_>, SessionError> {
        let mut state = self.lock();
        if state.is_analyzing {
            return Err(SessionError::Busy);
        }

        let validation = self.validator.validate(request);
        for warning in &validation.warnings {
            tracing::warn!("{}", warning);
        }
        if !validation.is_valid {
            return Err(SessionError::Rejected(validation.summary()));
        }

        state.is_analyzing = true;
        state.result = None;
        Ok(InFlight { session: self })
    }

    // The lock is never held across an await, so a poisoned state is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Clears the in-flight flag however the submission ends.
struct InFlight<'a> {
    session: &'a AnalysisSession,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.session.lock().is_analyzing = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    use super::*;
    use crate::analysis::{Delay, FixedRandom, MockAnalyzer, NoDelay};
    use crate::error::AnalysisError;

    fn mock_session() -> AnalysisSession {
        let analyzer = MockAnalyzer::default()
            .with_random(FixedRandom::constant(0.5))
            .with_delay(NoDelay);
        AnalysisSession::new(Arc::new(analyzer), RequestValidator::default())
    }

    struct CountingAnalyzer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Analyzer for CountingAnalyzer {
        async fn analyze(
            &self,
            request: &AnalysisRequest,
        ) -> Result<AnalysisResult, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MockAnalyzer::default()
                .with_random(FixedRandom::constant(0.5))
                .analyze_now(request))
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl Analyzer for FailingAnalyzer {
        async fn analyze(
            &self,
            _request: &AnalysisRequest,
        ) -> Result<AnalysisResult, AnalysisError> {
            Err(AnalysisError::Failed {
                request_id: Uuid::new_v4(),
                reason: "backend offline".to_string(),
            })
        }
    }

    /// Holds the analysis until the test opens the gate.
    struct GateDelay {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl Delay for GateDelay {
        async fn wait(&self, _duration: Duration) {
            self.gate.notified().await;
        }
    }

    #[tokio::test]
    async fn test_submit_stores_result() {
        let session = mock_session();
        assert_eq!(session.classification(), Classification::Unknown);
        assert!(session.result().is_none());

        let notice = session
            .submit(AnalysisRequest::new("Study finds moderate exercise improves heart health"))
            .await
            .unwrap();

        assert_eq!(notice, Notice::complete());
        assert!(!session.is_analyzing());
        assert_eq!(session.classification(), Classification::Real);
        assert!(session.result().is_some());
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_analyzer() {
        let analyzer = Arc::new(CountingAnalyzer {
            calls: AtomicUsize::new(0),
        });
        let session = AnalysisSession::new(analyzer.clone(), RequestValidator::default());

        let err = session.submit(AnalysisRequest::new("   ")).await.unwrap_err();
        assert!(matches!(err, SessionError::Rejected(_)));
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
        assert!(!session.is_analyzing());

        session
            .submit(AnalysisRequest::new("Council approves budget"))
            .await
            .unwrap();
        assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_long_and_nul_text_are_analyzed() {
        let session = mock_session();

        let long = "word ".repeat(20_001);
        assert_eq!(long.len(), 100_005);
        let notice = session.submit(AnalysisRequest::new(long)).await.unwrap();
        assert_eq!(notice, Notice::complete());
        assert!(session.result().is_some());

        let notice = session
            .submit(AnalysisRequest::new("headline\0tail"))
            .await
            .unwrap();
        assert_eq!(notice, Notice::complete());
        assert!(session.result().is_some());
    }

    #[tokio::test]
    async fn test_rejected_request_keeps_previous_result() {
        let session = mock_session();
        session
            .submit(AnalysisRequest::new("Council approves budget"))
            .await
            .unwrap();

        let err = session
            .submit(AnalysisRequest::new("headline").with_url("not a url"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("url"));
        assert!(session.result().is_some());
    }

    #[tokio::test]
    async fn test_failure_returns_failed_notice_and_clears_flag() {
        let session = AnalysisSession::new(Arc::new(FailingAnalyzer), RequestValidator::default());

        let notice = session
            .submit(AnalysisRequest::new("Anything at all"))
            .await
            .unwrap();

        assert!(notice.is_failure());
        assert_eq!(notice.title, "Analysis Failed");
        assert_eq!(notice.duration, Duration::from_millis(5000));
        assert!(!session.is_analyzing());
        assert!(session.result().is_none());
        assert_eq!(session.classification(), Classification::Unknown);
    }

    #[tokio::test]
    async fn test_resubmission_rejected_while_analyzing() {
        let gate = Arc::new(Notify::new());
        let analyzer = MockAnalyzer::default()
            .with_random(FixedRandom::constant(0.5))
            .with_delay(GateDelay { gate: gate.clone() });
        let session = Arc::new(AnalysisSession::new(
            Arc::new(analyzer),
            RequestValidator::default(),
        ));

        let first = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .submit(AnalysisRequest::new("BREAKING: shocking news"))
                    .await
            })
        };

        while !session.is_analyzing() {
            tokio::task::yield_now().await;
        }
        assert!(session.result().is_none());

        let err = session
            .submit(AnalysisRequest::new("Another article"))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Busy));

        gate.notify_one();
        let notice = first.await.unwrap().unwrap();
        assert_eq!(notice, Notice::complete());
        assert!(!session.is_analyzing());
        assert_eq!(session.classification(), Classification::Fake);
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_result() {
        let gate = Arc::new(Notify::new());
        let analyzer = MockAnalyzer::default()
            .with_random(FixedRandom::constant(0.5))
            .with_delay(GateDelay { gate: gate.clone() });
        let session = Arc::new(AnalysisSession::new(
            Arc::new(analyzer),
            RequestValidator::default(),
        ));

        gate.notify_one();
        session
            .submit(AnalysisRequest::new("Council approves budget"))
            .await
            .unwrap();
        assert!(session.result().is_some());

        let second = {
            let session = session.clone();
            tokio::spawn(async move { session.submit(AnalysisRequest::new("Second")).await })
        };
        while !session.is_analyzing() {
            tokio::task::yield_now().await;
        }
        assert!(session.result().is_none());

        gate.notify_one();
        second.await.unwrap().unwrap();
        assert!(session.result().is_some());
    }

    #[tokio::test]
    async fn test_reset_discards_result() {
        let session = mock_session();
        session
            .submit(AnalysisRequest::new("Council approves budget"))
            .await
            .unwrap();
        assert!(session.result().is_some());

        session.reset();
        assert!(session.result().is_none());
        assert_eq!(session.classification(), Classification::Unknown);
    }
}
