//! Core entities for dispatch attempts and batch aggregation.

/// Terminal result of a single dispatch attempt.
///
/// A tagged variant rather than optional `output`/`error` fields, so that
/// exactly one of the two is populated by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The external command exited with code 0. `output` is its captured
    /// standard output, verbatim.
    Success { output: String },
    /// The dispatch did not complete: non-zero exit (reason = captured
    /// stderr), timeout (fixed message), or invocation failure.
    Failure { reason: String },
}

/// Normalized record of one dispatch attempt.
///
/// Immutable after construction; built once per attempt and discarded when
/// the HTTP response is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The phone number as received from the caller, not the cleaned form
    /// used for validation.
    pub phone_number: String,
    pub result: DispatchResult,
}

impl DispatchOutcome {
    pub fn success(phone_number: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            result: DispatchResult::Success {
                output: output.into(),
            },
        }
    }

    pub fn failure(phone_number: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            result: DispatchResult::Failure {
                reason: reason.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, DispatchResult::Success { .. })
    }
}

/// Aggregate over an ordered sequence of dispatch outcomes.
///
/// Constructed only through [`BatchResult::from_outcomes`], so
/// `success_count <= total` and `outcomes.len() == total` hold by
/// construction. Outcome order matches input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub total: usize,
    pub success_count: usize,
    pub outcomes: Vec<DispatchOutcome>,
}

impl BatchResult {
    /// Builds the aggregate from per-element outcomes, preserving order.
    pub fn from_outcomes(outcomes: Vec<DispatchOutcome>) -> Self {
        let total = outcomes.len();
        let success_count = outcomes.iter().filter(|o| o.is_success()).count();

        Self {
            total,
            success_count,
            outcomes,
        }
    }
}
