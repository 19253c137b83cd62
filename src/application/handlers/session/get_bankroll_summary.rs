//! GetBankrollSummaryHandler - Query handler for aggregate results.

use std::sync::Arc;

use crate::domain::session::{metrics, BankrollSummary, SessionError};
use crate::ports::SessionRepository;

/// Handler computing totals and the cumulative profit curve.
pub struct GetBankrollSummaryHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetBankrollSummaryHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<BankrollSummary, SessionError> {
        let records = self.repository.list_all().await?;
        Ok(metrics::summarize(&records))
    }
}
