multiversx_sc::imports!();

use crate::types::{ProposalType, VoteOption};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("daoCreated")]
    fn dao_created_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] creator: &ManagedAddress,
        #[indexed] created_at: u64,
        name: &ManagedBuffer,
    );

    #[event("memberJoined")]
    fn member_joined_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
        membership_interest: &BigUint,
    );

    #[event("memberWithdrawn")]
    fn member_withdrawn_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
        membership_interest: &BigUint,
    );

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] proposal_type: ProposalType,
        voting_end: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] option: VoteOption,
        voting_power: &BigUint,
    );

    #[event("proposalPassed")]
    fn proposal_passed_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] yes_votes: &BigUint,
        no_votes: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] yes_votes: &BigUint,
        no_votes: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] proposal_type: ProposalType,
    );

    #[event("articlesAmended")]
    fn articles_amended_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
    );

    #[event("daoDissolved")]
    fn dao_dissolved_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] proposal_id: u64,
    );

    #[event("daoDissolvedInactivity")]
    fn dao_dissolved_inactivity_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] last_action_date: u64,
    );

    #[event("daoDissolvedExpired")]
    fn dao_dissolved_expired_event(
        &self,
        #[indexed] dao_address: &ManagedAddress,
        #[indexed] expiration_date: u64,
    );

    #[event("sweepSkipped")]
    fn sweep_skipped_event(&self, #[indexed] dao_address: &ManagedAddress);

    #[event("genesisImported")]
    fn genesis_imported_event(
        &self,
        #[indexed] daos: usize,
        #[indexed] members: usize,
        #[indexed] proposals: usize,
        votes: usize,
    );
}
