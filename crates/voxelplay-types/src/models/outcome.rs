//! Per-call outcomes and the per-account result row.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;

/// Why a call counted as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum FailureReason {
    /// Attempt sequence ran past its time budget
    Timeout,
    /// Non-success HTTP status after retries were exhausted
    HttpStatus(u16),
    /// Connection or transport failure
    Network,
    /// 2xx response whose body was not JSON
    InvalidResponse,
    /// 2xx response whose JSON body was empty or falsy
    EmptyPayload,
    /// Worker task panicked or was cancelled
    Aborted,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::HttpStatus(status) => write!(f, "http {}", status),
            Self::Network => write!(f, "network"),
            Self::InvalidResponse => write!(f, "invalid response"),
            Self::EmptyPayload => write!(f, "empty payload"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

/// Binary result of one endpoint call, keeping the failure cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure(FailureReason),
}

impl Outcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Success => None,
            Self::Failure(reason) => Some(*reason),
        }
    }

    /// Table cell text: always "success" or "failure".
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure(_) => "failure",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One summary row: exactly one outcome per [`Endpoint`], in [`Endpoint::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResult {
    /// 1-based position of the account in the token file
    pub index: usize,
    outcomes: [Outcome; Endpoint::COUNT],
}

impl AccountResult {
    /// Row with every field marked aborted until recorded.
    pub fn pending(index: usize) -> Self {
        Self { index, outcomes: [Outcome::Failure(FailureReason::Aborted); Endpoint::COUNT] }
    }

    pub fn record(&mut self, endpoint: Endpoint, outcome: Outcome) {
        if let Some(slot) = self.outcomes.get_mut(endpoint.position()) {
            *slot = outcome;
        }
    }

    pub fn outcome(&self, endpoint: Endpoint) -> Outcome {
        self.outcomes
            .get(endpoint.position())
            .copied()
            .unwrap_or(Outcome::Failure(FailureReason::Aborted))
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (Endpoint, Outcome)> + '_ {
        Endpoint::ALL.iter().copied().zip(self.outcomes.iter().copied())
    }

    pub fn account_label(&self) -> String {
        format!("Account {}", self.index)
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.success_count() == Endpoint::COUNT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_has_six_failures() {
        let row = AccountResult::pending(1);
        assert_eq!(row.outcomes().count(), 6);
        assert!(row.outcomes().all(|(_, o)| o.label() == "failure"));
    }

    #[test]
    fn test_record_and_lookup() {
        let mut row = AccountResult::pending(2);
        row.record(Endpoint::MissionVerify, Outcome::Success);
        row.record(Endpoint::User, Outcome::Failure(FailureReason::HttpStatus(403)));
        assert_eq!(row.outcome(Endpoint::MissionVerify), Outcome::Success);
        assert_eq!(
            row.outcome(Endpoint::User).failure_reason(),
            Some(FailureReason::HttpStatus(403))
        );
        assert_eq!(row.success_count(), 1);
        assert!(!row.all_succeeded());
        assert_eq!(row.account_label(), "Account 2");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "success");
        assert_eq!(Outcome::Failure(FailureReason::Timeout).to_string(), "failure");
        assert_eq!(FailureReason::HttpStatus(502).to_string(), "http 502");
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(Outcome::Failure(FailureReason::HttpStatus(404))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "result": "failure",
                "reason": { "kind": "http_status", "status": 404 }
            })
        );
    }
}
