//! The query pipeline: extract, parse, resolve, synthesize.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::distance::{self, DurationProvider};
use crate::domain::{ExtractionResult, ResolutionOutcome};
use crate::llm::ChatModel;
use crate::parser;

use super::error::{AssistantError, OUT_OF_CONTEXT_REPLY};
use super::extract::extract;
use super::synthesize::{synthesize_error, synthesize_success};

/// How a query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// The query was not about travel duration
    OutOfContext,
    /// The extraction could not be used
    Malformed,
    /// A duration was found and phrased
    Duration,
    /// The trip could not be resolved; the reasons were phrased
    Rejected,
    /// The final phrasing failed
    Fallback,
}

/// The single answer to one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalAnswer {
    pub text: String,
    pub kind: AnswerKind,
}

impl FinalAnswer {
    fn new(text: impl Into<String>, kind: AnswerKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Travel duration assistant.
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent queries.
pub struct Assistant<L, P> {
    model: L,
    durations: P,
}

impl<L: ChatModel, P: DurationProvider> Assistant<L, P> {
    pub fn new(model: L, durations: P) -> Self {
        Self { model, durations }
    }

    /// Answer a query, returning only the display text.
    pub async fn run(&self, query: &str) -> String {
        self.answer(query).await.text
    }

    /// Answer a query.
    ///
    /// Never fails: every upstream problem maps to a fixed message. The
    /// query should be non-empty; callers reject blank input first.
    #[instrument(skip(self))]
    pub async fn answer(&self, query: &str) -> FinalAnswer {
        let answer = self.answer_inner(query).await;
        info!(kind = ?answer.kind, "answered query");
        answer
    }

    async fn answer_inner(&self, query: &str) -> FinalAnswer {
        debug!("extracting");
        let trip = match self.extract_trip(query).await {
            Ok(ExtractionResult::Trip(trip)) => trip,
            Ok(ExtractionResult::OutOfContext) => {
                return FinalAnswer::new(OUT_OF_CONTEXT_REPLY, AnswerKind::OutOfContext);
            }
            Err(e) => {
                warn!(error = %e, "extraction failed");
                return FinalAnswer::new(e.user_message(), AnswerKind::Malformed);
            }
        };

        debug!(
            origin = %trip.origin,
            destination = %trip.destination,
            mode = %trip.mode,
            "resolving"
        );
        let outcome = distance::resolve(&self.durations, &trip).await;

        debug!(%outcome, "synthesizing");
        let (result, kind) = match &outcome {
            ResolutionOutcome::Success { duration } => (
                synthesize_success(&self.model, &trip, duration).await,
                AnswerKind::Duration,
            ),
            ResolutionOutcome::Failure { errors } => (
                synthesize_error(&self.model, errors).await,
                AnswerKind::Rejected,
            ),
        };

        match result.map_err(AssistantError::Synthesis) {
            Ok(text) => FinalAnswer::new(text, kind),
            Err(e) => {
                warn!(error = %e, "synthesis failed");
                FinalAnswer::new(e.user_message(), AnswerKind::Fallback)
            }
        }
    }

    async fn extract_trip(&self, query: &str) -> Result<ExtractionResult, AssistantError> {
        let raw = extract(&self.model, query)
            .await
            .map_err(AssistantError::Extraction)?;
        Ok(parser::parse(&raw)?)
    }
}
