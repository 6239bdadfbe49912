//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every move.
//! [`Board::play`](super::Board::play) checks them in debug builds, and
//! they can be tested on their own.

pub mod alternating_turn;
pub mod log_consistent;
pub mod status_consistent;
pub mod write_once;

pub use alternating_turn::AlternatingTurnInvariant;
pub use log_consistent::LogConsistentInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use write_once::WriteOnceContract;

use super::Board;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Turns `(holds, description)` pairs into the violations of the failing ones.
fn collect_violations<const N: usize>(
    checks: [(bool, &'static str); N],
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = checks
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (
    AlternatingTurnInvariant,
    LogConsistentInvariant,
    StatusConsistentInvariant,
);

/// Checks a single move: cells written before stay written, and the
/// resulting board satisfies [`BoardInvariants`].
#[instrument(skip_all)]
pub fn check_transition(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = match BoardInvariants::check_all(after) {
        Ok(()) => Vec::new(),
        Err(violations) => violations,
    };

    if !WriteOnceContract::holds(before, after) {
        violations.push(InvariantViolation::new(WriteOnceContract::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        for violation in &violations {
            warn!(%violation, "Board invariant violated");
        }
        Err(violations)
    }
}
