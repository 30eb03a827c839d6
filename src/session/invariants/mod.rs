//! First-class invariants for a game's history.
//!
//! Invariants are logical properties that must hold after every operation
//! on a [`Session`](crate::Session). They are testable independently and
//! document what the history guarantees.

pub mod alternating_turn;
pub mod decided_is_terminal;
pub mod initial_entry;
pub mod single_cell_transition;

pub use alternating_turn::AlternatingTurnInvariant;
pub use decided_is_terminal::DecidedIsTerminalInvariant;
pub use initial_entry::InitialEntryInvariant;
pub use single_cell_transition::SingleCellTransitionInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
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

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All history invariants as a composable set.
pub type SessionInvariants = (
    InitialEntryInvariant,
    SingleCellTransitionInvariant,
    AlternatingTurnInvariant,
    DecidedIsTerminalInvariant,
);
