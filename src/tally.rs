multiversx_sc::imports!();

use crate::events;
use crate::storage;
use crate::types::{Proposal, ProposalStatus, VoteOption};
use crate::BPS_DENOMINATOR;

#[multiversx_sc::module]
pub trait TallyModule: storage::StorageModule + events::EventsModule {
    /// Sums every stored vote of the proposal. Re-votes overwrite the
    /// voter's record, so each voter is counted exactly once.
    fn recount_votes(&self, dao_address: &ManagedAddress, proposal_id: u64) -> (BigUint, BigUint) {
        let mut yes_votes = BigUint::zero();
        let mut no_votes = BigUint::zero();

        for voter in self.proposal_voters(dao_address, proposal_id).iter() {
            let vote = self.votes(dao_address, proposal_id, &voter).get();
            match vote.option {
                VoteOption::Yes => yes_votes += &vote.voting_power,
                VoteOption::No => no_votes += &vote.voting_power,
            }
        }

        (yes_votes, no_votes)
    }

    /// Minimum cast weight for a proposal to pass. Zero when no quorum is
    /// configured.
    fn quorum_threshold(&self, dao_address: &ManagedAddress) -> BigUint {
        let quorum_bps = self.quorum_bps().get();
        if quorum_bps == 0 {
            return BigUint::zero();
        }

        let total_interest = self.total_interest(dao_address).get();
        (&total_interest * quorum_bps) / BPS_DENOMINATOR
    }

    /// Finalizes an open proposal whose voting period is over:
    /// passed when yes > no and the cast weight meets quorum, rejected
    /// otherwise. Returns false (and writes nothing) for anything else.
    fn tally(&self, proposal: &mut Proposal<Self::Api>, now: u64) -> bool {
        if proposal.status != ProposalStatus::Open || now < proposal.voting_end {
            return false;
        }

        let cast = &proposal.yes_votes + &proposal.no_votes;
        let quorum = self.quorum_threshold(&proposal.dao_address);

        if proposal.yes_votes > proposal.no_votes && cast >= quorum {
            proposal.status = ProposalStatus::Passed;
            self.proposal_passed_event(
                &proposal.dao_address,
                proposal.id,
                &proposal.yes_votes,
                &proposal.no_votes,
            );
        } else {
            proposal.status = ProposalStatus::Rejected;
            self.proposal_rejected_event(
                &proposal.dao_address,
                proposal.id,
                &proposal.yes_votes,
                &proposal.no_votes,
            );
        }

        self.store_proposal(proposal);
        true
    }

    fn tally_expired_proposals(&self, dao_address: &ManagedAddress, now: u64) -> usize {
        // Snapshot first: tallying removes ids from the open set.
        let mut open_ids = ManagedVec::<Self::Api, u64>::new();
        for id in self.open_proposals(dao_address).iter() {
            open_ids.push(id);
        }

        let mut finalized = 0;
        for id in open_ids.iter() {
            if let Some(mut proposal) = self.load_proposal(dao_address, id) {
                if self.tally(&mut proposal, now) {
                    finalized += 1;
                }
            }
        }
        finalized
    }
}
