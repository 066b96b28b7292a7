use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, ProposalId, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// Ballot state must outlive the whole campaign, registration through tally.
// At ~5s per ledger: 30 days ≈ 518,400 ledgers.
const BALLOT_TTL_LEDGERS: u32 = 518_400;

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Admin, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: &WorkflowStatus) {
    env.storage().persistent().set(&DataKey::Status, status);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Status, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .persistent()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn set_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_voter(env: &Env, address: &Address) -> Option<Voter> {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(address.clone()))
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Append a proposal at the next contiguous index and return that index.
pub fn append_proposal(env: &Env, proposal: &Proposal) -> ProposalId {
    let proposal_id = get_proposal_count(env);
    set_proposal(env, proposal_id, proposal);
    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    env.storage().persistent().extend_ttl(
        &DataKey::ProposalCount,
        BALLOT_TTL_LEDGERS,
        BALLOT_TTL_LEDGERS,
    );
    proposal_id
}

pub fn set_proposal(env: &Env, proposal_id: ProposalId, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALLOT_TTL_LEDGERS, BALLOT_TTL_LEDGERS);
}

pub fn get_proposal(env: &Env, proposal_id: ProposalId) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

// ── Winning proposal ─────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, proposal_id: ProposalId) {
    env.storage()
        .persistent()
        .set(&DataKey::WinningProposal, &proposal_id);
    env.storage().persistent().extend_ttl(
        &DataKey::WinningProposal,
        BALLOT_TTL_LEDGERS,
        BALLOT_TTL_LEDGERS,
    );
}

pub fn get_winning_proposal(env: &Env) -> ProposalId {
    env.storage()
        .persistent()
        .get(&DataKey::WinningProposal)
        .unwrap_or(0u32)
}
