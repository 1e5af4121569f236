use std::sync::Arc;

use crate::modules::batch::domain::{BatchReport, BatchRequest};
use crate::modules::provider::domain::ProviderKind;
use crate::modules::provider::infrastructure::{create_provider, TokenManager};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;
use crate::{log_info, log_warn};

use super::orchestrator::BatchOrchestrator;
use super::progress::{ProgressEmitter, ProgressSink};

/// Entry point for running one batch: pre-flight validation, token
/// acquisition for the custom provider, then the orchestrator.
pub struct BatchService {
    token_manager: TokenManager,
}

impl BatchService {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            token_manager: TokenManager::new()?,
        })
    }

    /// Run the batch, streaming every outcome into `sink`.
    ///
    /// Configuration problems (unsupported provider/mode combination,
    /// missing key or endpoint) fail here before any item is touched.
    /// Everything after that is reported per item and the returned
    /// report is complete even when every item failed.
    pub async fn execute(
        &self,
        request: &BatchRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> AppResult<BatchReport> {
        let _timer = TimedOperation::new("batch_execute");

        request.config.validate_for(request.mode.operation())?;
        let emitter = ProgressEmitter::new(sink);

        let provider = if request.config.kind == ProviderKind::Custom {
            match self.token_manager.acquire(&request.config).await {
                Some(token) => create_provider(&request.config, Some(token))?,
                None => {
                    log_warn!(
                        "Batch: token acquisition failed; reporting auth failure for all {} item(s)",
                        request.items.len()
                    );
                    return Ok(BatchOrchestrator::run_auth_failed(request, &emitter));
                }
            }
        } else {
            create_provider(&request.config, None)?
        };

        let report = BatchOrchestrator::new(provider).run(request, &emitter).await;

        log_info!(
            "Batch: finished {} of {} item(s), {} error(s)",
            report.outcomes.len(),
            report.summary.row_count,
            report.summary.error_count
        );

        Ok(report)
    }
}
