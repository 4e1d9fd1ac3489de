use super::error::NotifierError;
use crate::release;
use futures::future::BoxFuture;

/// Immutable presentation parameters handed to the prompt service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// The version the prompt is about
    pub version: String,
    /// Whether the prompt should offer the "remind me later" snooze option
    pub allows_sleep: bool,
}

/// The user's interaction with the update prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    /// User asked to be reminded later (snooze)
    RemindLater,
    /// User dismissed the prompt
    Dismissed,
}

/// User-facing prompt surface, implemented by the hosting application's
/// presentation layer (modal dialog, toast, whatever fits).
///
/// The returned future suspends until the user responds. Dropping it
/// abandons the wait; it does not close the prompt.
pub trait PromptService: Send + Sync {
    fn open(&self, options: PromptOptions) -> BoxFuture<'_, anyhow::Result<PromptResponse>>;
}

/// Open the update prompt for a version
///
/// Classifies `version` to decide whether the snooze option is offered,
/// then hands presentation to the service. A service failure propagates as
/// `PresentationFailure` with no retry. Callers are responsible for asking
/// the policy evaluator first; this function never consults it.
pub async fn notify(
    service: &dyn PromptService,
    version: &str,
) -> Result<PromptResponse, NotifierError> {
    if version.trim().is_empty() {
        return Err(NotifierError::InvalidArgument(
            "version must be a non-empty string".to_string(),
        ));
    }

    let options = PromptOptions {
        version: version.to_string(),
        allows_sleep: release::classify(version).allows_sleep(),
    };

    service
        .open(options)
        .await
        .map_err(|e| NotifierError::PresentationFailure(format!("{:#}", e)))
}
