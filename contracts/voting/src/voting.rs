//! Ballot engine contract
//!
//! A single shared ledger driving one ballot through an ordered, irreversible
//! workflow: the administrator enrolls voters, voters submit proposals and
//! cast one vote each, and the administrator tallies a deterministic winner.
//! Every state-changing operation authenticates its caller, checks the
//! workflow status, and emits a notification for external viewers.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};

use crate::{
    errors::VotingError,
    storage,
    types::{Proposal, ProposalId, Voter, WorkflowStatus},
};

/// Description of the sentinel proposal seeded when registration opens.
const GENESIS_DESCRIPTION: &str = "GENESIS";

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Install the administrator and open voter registration.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        storage::set_status(&env, &WorkflowStatus::RegisteringVoters);

        env.events().publish((symbol_short!("init"),), (admin,));

        Ok(())
    }

    // ── Workflow administration ──────────────────────────────────────────────

    /// Open proposal registration.
    ///
    /// Seeds the sentinel proposal at index 0 so that real proposals start at
    /// index 1 and a tally over an empty ballot stays well defined. The
    /// sentinel emits no proposal notification.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::advance_status(
            &env,
            WorkflowStatus::RegisteringVoters,
            WorkflowStatus::ProposalsRegistrationStarted,
        )?;

        storage::append_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        );

        Ok(())
    }

    /// Close proposal registration.
    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::advance_status(
            &env,
            WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowStatus::ProposalsRegistrationEnded,
        )
    }

    /// Open the voting session.
    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::advance_status(
            &env,
            WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowStatus::VotingSessionStarted,
        )
    }

    /// Close the voting session.
    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::advance_status(
            &env,
            WorkflowStatus::VotingSessionStarted,
            WorkflowStatus::VotingSessionEnded,
        )
    }

    /// Compute the winning proposal and close the ballot.
    ///
    /// Single ascending scan over all proposals; strict `>` keeps the lowest
    /// index among equal maxima. With no votes cast the sentinel at index 0
    /// wins with a count of 0. Callable once: `VotesTallied` is terminal and
    /// cannot be re-entered.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::VotingSessionEnded)?;

        let count = storage::get_proposal_count(&env);
        let mut winning_id: ProposalId = 0;
        let mut winning_count: u32 = 0;
        for proposal_id in 0..count {
            if let Some(proposal) = storage::get_proposal(&env, proposal_id) {
                if proposal.vote_count > winning_count {
                    winning_count = proposal.vote_count;
                    winning_id = proposal_id;
                }
            }
        }
        storage::set_winning_proposal(&env, winning_id);

        Self::advance_status(
            &env,
            WorkflowStatus::VotingSessionEnded,
            WorkflowStatus::VotesTallied,
        )
    }

    // ── Voter registry ───────────────────────────────────────────────────────

    /// Enroll a voter. Admin-only, while voter registration is open.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        Self::require_admin(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if let Some(record) = storage::get_voter(&env, &voter) {
            if record.is_registered {
                return Err(VotingError::AlreadyRegistered);
            }
        }

        storage::set_voter(
            &env,
            &voter,
            &Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );

        env.events().publish((symbol_short!("voter_reg"),), (voter,));

        Ok(())
    }

    /// Look up any voter record. Restricted to registered voters; addresses
    /// that were never enrolled yield the unregistered default record.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        Self::require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter).unwrap_or_else(Voter::unregistered))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submit a proposal while proposal registration is open. Restricted to
    /// registered voters. Returns the new proposal's index.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<ProposalId, VotingError> {
        Self::require_voter(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        if description.len() == 0 {
            return Err(VotingError::EmptyDescription);
        }

        let proposal_id = storage::append_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );

        env.events().publish((symbol_short!("prop_reg"),), (proposal_id,));

        Ok(proposal_id)
    }

    /// Fetch one proposal by index. Restricted to registered voters.
    pub fn get_one_proposal(
        env: Env,
        caller: Address,
        proposal_id: ProposalId,
    ) -> Result<Proposal, VotingError> {
        Self::require_voter(&env, &caller)?;
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)
    }

    /// Number of proposals stored, sentinel included. Unrestricted.
    pub fn get_proposals_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`.
    ///
    /// The voter's flags and the proposal's tally commit together; a failure
    /// anywhere leaves both untouched.
    pub fn set_vote(env: Env, caller: Address, proposal_id: ProposalId) -> Result<(), VotingError> {
        let mut voter = Self::require_voter(&env, &caller)?;
        Self::require_status(&env, WorkflowStatus::VotingSessionStarted)?;
        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        proposal.vote_count += 1;

        storage::set_voter(&env, &caller, &voter);
        storage::set_proposal(&env, proposal_id, &proposal);

        env.events()
            .publish((symbol_short!("voted"),), (caller, proposal_id));

        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Current workflow status.
    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// The administrator address.
    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    /// Index of the winning proposal. Meaningful only once votes are tallied;
    /// 0 beforehand.
    pub fn winning_proposal_id(env: Env) -> ProposalId {
        storage::get_winning_proposal(&env)
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
        if *caller != admin {
            return Err(VotingError::Unauthorized);
        }
        Ok(())
    }

    fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
        caller.require_auth();
        match storage::get_voter(env, caller) {
            Some(voter) if voter.is_registered => Ok(voter),
            _ => Err(VotingError::NotAVoter),
        }
    }

    fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
        if storage::get_status(env) != expected {
            return Err(VotingError::InvalidPhase);
        }
        Ok(())
    }

    /// Advance from `from` to its immediate successor `to` and emit the
    /// status-change notification carrying both values.
    fn advance_status(
        env: &Env,
        from: WorkflowStatus,
        to: WorkflowStatus,
    ) -> Result<(), VotingError> {
        Self::require_status(env, from)?;
        storage::set_status(env, &to);
        env.events().publish((symbol_short!("status"),), (from, to));
        Ok(())
    }
}
