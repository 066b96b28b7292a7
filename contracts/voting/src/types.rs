//! Data model for the ballot engine
//!
//! This module defines the workflow state machine, the voter and proposal
//! records held by the ledger, and the storage keys they live under.

use soroban_sdk::{contracttype, Address, String};

/// Index of a proposal in the append-only proposal list
pub type ProposalId = u32;

/// Ordered workflow states gating which operations are legal
///
/// The ballot advances through these states in the declared order, one step
/// at a time, and never moves backwards. `VotesTallied` is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Record kept for every enrolled voter
///
/// Created by the administrator during voter registration and mutated exactly
/// once, by a successful vote. `voted_proposal_id` is meaningful only while
/// `has_voted` is true.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    pub voted_proposal_id: ProposalId,
}

impl Voter {
    /// The record returned for identities that were never enrolled.
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// A candidate option on the ballot
///
/// Immutable once appended except for `vote_count`, which only successful
/// votes increment. Index 0 is the sentinel created when proposal
/// registration opens; real proposals start at index 1.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys for all ballot state
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Status,
    ProposalCount,
    WinningProposal,
    Voter(Address),
    Proposal(ProposalId),
}
