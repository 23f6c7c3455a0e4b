use crate::core::session::{CalculatorSession, SessionAction};
use crate::core::{DtiResult, ResultRenderer};
use crate::utils::error::{DtiError, Result};

/// Submits a session and hands the result to a renderer.
pub struct DtiEngine<R: ResultRenderer> {
    renderer: R,
}

impl<R: ResultRenderer> DtiEngine<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Runs one calculation. Returns the rendered report together with the
    /// updated session, or the validation error that stopped it.
    pub fn run(&self, session: CalculatorSession) -> Result<(CalculatorSession, String)> {
        tracing::debug!(
            breakdown = session.breakdown_enabled(),
            categories = session.categories().len(),
            "Submitting calculation"
        );

        let session = session.apply(SessionAction::Submit);
        if let Some(e) = session.error() {
            return Err(DtiError::Validation(e.clone()));
        }
        let result = session.result().ok_or_else(|| DtiError::ProcessingError {
            message: "submission produced neither a result nor an error".to_string(),
        })?;

        tracing::info!(
            percentage = result.percentage,
            risk = %result.risk_level,
            "DTI ratio computed"
        );

        let output = self.render(result)?;
        Ok((session, output))
    }

    pub fn render(&self, result: &DtiResult) -> Result<String> {
        self.renderer.render(result)
    }
}
