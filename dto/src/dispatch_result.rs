use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Aggregate outcome of a dispatch batch.
/// `sent + failed` always equals `total`.
#[derive(Debug, Serialize, Deserialize, Getters, Default, PartialEq, Eq, Clone, Copy)]
pub struct DispatchResult {
    total: usize,
    sent: usize,
    failed: usize,
}

impl DispatchResult {
    /// Start a batch of `total` recipients, none of them attempted yet.
    pub fn new(total: usize) -> Self {
        Self {
            total,
            sent: 0,
            failed: 0,
        }
    }

    pub fn record_success(&mut self) {
        self.sent += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn attempted(&self) -> usize {
        self.sent + self.failed
    }
}

/// What the bulk-send endpoint answers once the batch has completed.
/// A batch with failures is still a success: the caller reads `failed`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct BulkSendResponse {
    success: bool,
    #[serde(flatten)]
    result: DispatchResult,
}

impl From<DispatchResult> for BulkSendResponse {
    fn from(result: DispatchResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}
