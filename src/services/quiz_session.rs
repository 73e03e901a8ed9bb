use std::sync::Arc;

use crate::{
    models::domain::{QuestionId, QuizError},
    services::{
        quiz_collector::QuizCollector,
        recommendation_service::{RecommendationOutcome, RecommendationService, RecommendationTask},
    },
};

/// One user's quiz run: the collector plus at most one in-flight request.
pub struct QuizSession {
    collector: QuizCollector,
    service: Arc<RecommendationService>,
    pending: Option<RecommendationTask>,
}

impl QuizSession {
    pub fn new(service: Arc<RecommendationService>) -> Self {
        Self {
            collector: QuizCollector::default(),
            service,
            pending: None,
        }
    }

    pub fn collector(&self) -> &QuizCollector {
        &self.collector
    }

    pub fn record_answer(&mut self, question_id: QuestionId, value: &str) -> Result<(), QuizError> {
        self.collector.record_answer(question_id, value)
    }

    pub fn go_back(&mut self) -> bool {
        self.collector.go_back()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Freezes the answers and starts the recommendation request.
    pub fn submit(&mut self) -> Result<(), QuizError> {
        let answers = self.collector.answers()?;

        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.pending = Some(self.service.spawn(answers));
        Ok(())
    }

    /// Cancels any in-flight request; its result is never delivered.
    pub fn restart(&mut self) {
        if let Some(task) = self.pending.take() {
            log::info!("Quiz restarted with a pending recommendation request, cancelling it");
            task.cancel();
        }
        self.collector.reset();
    }

    pub async fn take_result(&mut self) -> Result<Option<RecommendationOutcome>, QuizError> {
        let task = self.pending.take().ok_or(QuizError::NothingPending)?;
        Ok(task.join().await)
    }
}
