multiversx_sc::imports!();

use crate::errors::{
    ERR_CONTRIBUTION_TOO_SMALL, ERR_DAO_NOT_FOUND, ERR_MEMBER_NOT_FOUND, ERR_PROPOSAL_ID_OUT_OF_RANGE,
    ERR_PROPOSAL_NOT_FOUND, ERR_VOTE_NOT_FOUND,
};
use crate::types::{Dao, Member, Proposal, ProposalStatus, Vote};

/// Typed accessors over the entity store. Each `store_*` is one logical
/// write of the entity under its natural key plus the index entries that
/// stand in for prefix iteration. No business rules live here.
///
/// `record_scopes` holds every DAO address any record was written under,
/// whether or not the DAO itself exists, so a full scan never misses a
/// record imported without its parent.
#[multiversx_sc::module]
pub trait StorageModule {
    // ========================================================
    // DAO: keyed by address
    // ========================================================

    fn store_dao(&self, dao: &Dao<Self::Api>) {
        self.daos(&dao.address).set(dao);
        self.dao_addresses().insert(dao.address.clone());
        self.record_scopes().insert(dao.address.clone());
    }

    fn load_dao(&self, address: &ManagedAddress) -> Option<Dao<Self::Api>> {
        let mapper = self.daos(address);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    // ========================================================
    // Member: keyed by (DAO, member)
    // ========================================================

    /// Also keeps the DAO's total interest in step when a record is
    /// overwritten.
    fn store_member(&self, member: &Member<Self::Api>) {
        let mapper = self.members(&member.dao_address, &member.address);
        let total = self.total_interest(&member.dao_address);
        if !mapper.is_empty() {
            let previous = mapper.get();
            total.update(|t| *t -= &previous.membership_interest);
        }
        total.update(|t| *t += &member.membership_interest);

        mapper.set(member);
        self.dao_members(&member.dao_address)
            .insert(member.address.clone());
        self.record_scopes().insert(member.dao_address.clone());
    }

    fn load_member(
        &self,
        dao_address: &ManagedAddress,
        address: &ManagedAddress,
    ) -> Option<Member<Self::Api>> {
        let mapper = self.members(dao_address, address);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    fn remove_member(&self, member: &Member<Self::Api>) {
        self.total_interest(&member.dao_address)
            .update(|t| *t -= &member.membership_interest);
        self.members(&member.dao_address, &member.address).clear();
        self.dao_members(&member.dao_address)
            .swap_remove(&member.address);
    }

    // ========================================================
    // Proposal: keyed by (DAO, id)
    // ========================================================

    fn store_proposal(&self, proposal: &Proposal<Self::Api>) {
        let dao_address = &proposal.dao_address;
        let following_id = proposal
            .id
            .checked_add(1)
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_ID_OUT_OF_RANGE));

        self.proposals(dao_address, proposal.id).set(proposal);
        self.proposal_ids(dao_address).insert(proposal.id);
        self.record_scopes().insert(dao_address.clone());

        let next_id = self.next_proposal_id(dao_address);
        if following_id > next_id.get() {
            next_id.set(following_id);
        }

        if proposal.status == ProposalStatus::Open {
            self.open_proposals(dao_address).insert(proposal.id);
        } else {
            self.open_proposals(dao_address).swap_remove(&proposal.id);
        }
    }

    fn load_proposal(&self, dao_address: &ManagedAddress, id: u64) -> Option<Proposal<Self::Api>> {
        let mapper = self.proposals(dao_address, id);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    // ========================================================
    // Vote: keyed by (DAO, proposal id, voter)
    // ========================================================

    fn store_vote(&self, vote: &Vote<Self::Api>) {
        self.votes(&vote.dao_address, vote.proposal_id, &vote.voter)
            .set(vote);
        self.proposal_voters(&vote.dao_address, vote.proposal_id)
            .insert(vote.voter.clone());
        self.voted_proposals(&vote.dao_address)
            .insert(vote.proposal_id);
        self.record_scopes().insert(vote.dao_address.clone());
    }

    fn load_vote(
        &self,
        dao_address: &ManagedAddress,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> Option<Vote<Self::Api>> {
        let mapper = self.votes(dao_address, proposal_id, voter);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    // ========================================================
    // Pooled contributions
    // Per token, members hold shares of the pooled balance.
    // ========================================================

    /// Pools `amount` and mints shares to `holder` at the current
    /// balance/share ratio (1:1 into an empty pool).
    fn mint_pool_shares(
        &self,
        dao_address: &ManagedAddress,
        holder: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let supply = self.pool_share_supply(dao_address, token).get();
        let balance = self.pool_balance(dao_address, token).get();

        let shares = if supply == 0u64 || balance == 0u64 {
            amount.clone()
        } else {
            // shares = amount * supply / balance_before
            (amount * &supply) / &balance
        };
        require!(shares > 0u64, ERR_CONTRIBUTION_TOO_SMALL);

        self.pool_tokens(dao_address).insert(token.clone());
        self.pool_balance(dao_address, token)
            .update(|b| *b += amount);
        self.pool_share_supply(dao_address, token)
            .update(|s| *s += &shares);
        self.pool_shares(dao_address, holder, token)
            .update(|s| *s += &shares);

        shares
    }

    /// Burns all of `holder`'s shares of `token` and returns the amount
    /// they redeem for. The last holder takes the whole balance.
    fn redeem_pool_shares(
        &self,
        dao_address: &ManagedAddress,
        holder: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let shares = self.pool_shares(dao_address, holder, token).take();
        if shares == 0u64 {
            return BigUint::zero();
        }

        let supply_mapper = self.pool_share_supply(dao_address, token);
        let balance_mapper = self.pool_balance(dao_address, token);
        let supply = supply_mapper.get();
        let balance = balance_mapper.get();

        if shares >= supply {
            supply_mapper.clear();
            balance_mapper.clear();
            self.pool_tokens(dao_address).swap_remove(token);
            return balance;
        }

        // payout = shares * balance / supply
        let payout = (&shares * &balance) / &supply;
        supply_mapper.set(&supply - &shares);
        balance_mapper.set(&balance - &payout);
        payout
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDao)]
    fn get_dao(&self, address: ManagedAddress) -> Dao<Self::Api> {
        self.load_dao(&address)
            .unwrap_or_else(|| sc_panic!(ERR_DAO_NOT_FOUND))
    }

    #[view(getDaos)]
    fn get_daos(&self) -> MultiValueEncoded<Dao<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for address in self.dao_addresses().iter() {
            if let Some(dao) = self.load_dao(&address) {
                result.push(dao);
            }
        }
        result
    }

    #[view(getMember)]
    fn get_member(&self, dao_address: ManagedAddress, address: ManagedAddress) -> Member<Self::Api> {
        self.load_member(&dao_address, &address)
            .unwrap_or_else(|| sc_panic!(ERR_MEMBER_NOT_FOUND))
    }

    #[view(getDaoMembers)]
    fn get_dao_members(&self, dao_address: ManagedAddress) -> MultiValueEncoded<Member<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for address in self.dao_members(&dao_address).iter() {
            if let Some(member) = self.load_member(&dao_address, &address) {
                result.push(member);
            }
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, dao_address: ManagedAddress, id: u64) -> Proposal<Self::Api> {
        self.load_proposal(&dao_address, id)
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_NOT_FOUND))
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self, dao_address: ManagedAddress) -> u64 {
        self.next_proposal_id(&dao_address).get()
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        dao_address: ManagedAddress,
        proposal_id: u64,
        voter: ManagedAddress,
    ) -> Vote<Self::Api> {
        self.load_vote(&dao_address, proposal_id, &voter)
            .unwrap_or_else(|| sc_panic!(ERR_VOTE_NOT_FOUND))
    }

    #[view(getProposalVoters)]
    fn get_proposal_voters(
        &self,
        dao_address: ManagedAddress,
        proposal_id: u64,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.proposal_voters(&dao_address, proposal_id).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getPoolBalance)]
    fn get_pool_balance(&self, dao_address: ManagedAddress, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        self.pool_balance(&dao_address, &token).get()
    }

    #[view(getPoolShares)]
    fn get_pool_shares(
        &self,
        dao_address: ManagedAddress,
        holder: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.pool_shares(&dao_address, &holder, &token).get()
    }

    #[view(getTotalInterest)]
    fn get_total_interest(&self, dao_address: ManagedAddress) -> BigUint {
        self.total_interest(&dao_address).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("quorumBps")]
    fn quorum_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("actionHandler")]
    fn action_handler(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("genesisSealed")]
    fn genesis_sealed(&self) -> SingleValueMapper<bool>;

    // ── DAOs ──

    #[storage_mapper("daos")]
    fn daos(&self, address: &ManagedAddress) -> SingleValueMapper<Dao<Self::Api>>;

    #[storage_mapper("daoAddresses")]
    fn dao_addresses(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("recordScopes")]
    fn record_scopes(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Members ──

    #[storage_mapper("members")]
    fn members(
        &self,
        dao_address: &ManagedAddress,
        address: &ManagedAddress,
    ) -> SingleValueMapper<Member<Self::Api>>;

    #[storage_mapper("daoMembers")]
    fn dao_members(&self, dao_address: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("totalInterest")]
    fn total_interest(&self, dao_address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, dao_address: &ManagedAddress, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("nextProposalId")]
    fn next_proposal_id(&self, dao_address: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("proposalIds")]
    fn proposal_ids(&self, dao_address: &ManagedAddress) -> UnorderedSetMapper<u64>;

    #[storage_mapper("openProposals")]
    fn open_proposals(&self, dao_address: &ManagedAddress) -> UnorderedSetMapper<u64>;

    // ── Votes ──

    #[storage_mapper("votes")]
    fn votes(
        &self,
        dao_address: &ManagedAddress,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<Vote<Self::Api>>;

    /// Proposal ids with at least one stored vote
    #[storage_mapper("votedProposals")]
    fn voted_proposals(&self, dao_address: &ManagedAddress) -> UnorderedSetMapper<u64>;

    #[storage_mapper("proposalVoters")]
    fn proposal_voters(
        &self,
        dao_address: &ManagedAddress,
        proposal_id: u64,
    ) -> UnorderedSetMapper<ManagedAddress>;

    // ── Pooled contributions ──

    #[storage_mapper("poolTokens")]
    fn pool_tokens(&self, dao_address: &ManagedAddress) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("poolBalance")]
    fn pool_balance(
        &self,
        dao_address: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("poolShareSupply")]
    fn pool_share_supply(
        &self,
        dao_address: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("poolShares")]
    fn pool_shares(
        &self,
        dao_address: &ManagedAddress,
        holder: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;
}
