//! Error codes for the ballot engine
//!
//! Every failure is synchronous and typed; a failed invocation leaves the
//! ledger untouched. Callers must fix the precondition (authorization,
//! workflow status, or input) and reissue.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VotingError {
    /// Caller is not the administrator
    Unauthorized = 1,

    /// Caller is not a registered voter
    NotAVoter = 2,

    /// Operation attempted outside its required workflow status
    InvalidPhase = 3,

    /// Voter address is already enrolled
    AlreadyRegistered = 4,

    /// Voter has already cast their one vote
    AlreadyVoted = 5,

    /// Proposal index does not reference a stored proposal
    ProposalNotFound = 6,

    /// Proposal description must not be empty
    EmptyDescription = 7,

    /// Contract already initialized
    AlreadyInitialized = 8,

    /// Contract not initialized
    NotInitialized = 9,
}
