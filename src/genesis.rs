multiversx_sc::imports!();

use crate::errors::{ERR_GENESIS_SEALED, ERR_ONLY_OWNER};
use crate::events;
use crate::storage;
use crate::types::GenesisEntry;

/// Bulk import/export of the four entity sets. Import writes records as
/// given; cross-references are the caller's responsibility.
#[multiversx_sc::module]
pub trait GenesisModule: storage::StorageModule + events::EventsModule {
    /// Every stored record, DAOs first, then members, proposals and votes.
    /// Records whose DAO was never stored are included.
    #[view(exportState)]
    fn export_state(&self) -> MultiValueEncoded<GenesisEntry<Self::Api>> {
        let mut result = MultiValueEncoded::new();

        for dao_address in self.dao_addresses().iter() {
            if let Some(dao) = self.load_dao(&dao_address) {
                result.push(GenesisEntry::Dao(dao));
            }
        }

        for scope in self.record_scopes().iter() {
            for address in self.dao_members(&scope).iter() {
                if let Some(member) = self.load_member(&scope, &address) {
                    result.push(GenesisEntry::Member(member));
                }
            }
        }

        for scope in self.record_scopes().iter() {
            for id in self.proposal_ids(&scope).iter() {
                if let Some(proposal) = self.load_proposal(&scope, id) {
                    result.push(GenesisEntry::Proposal(proposal));
                }
            }
        }

        for scope in self.record_scopes().iter() {
            for id in self.voted_proposals(&scope).iter() {
                for voter in self.proposal_voters(&scope, id).iter() {
                    if let Some(vote) = self.load_vote(&scope, id, &voter) {
                        result.push(GenesisEntry::Vote(vote));
                    }
                }
            }
        }

        result
    }

    /// Writes DAOs, then members, then proposals, then votes, whatever the
    /// order of `entries`. May be called repeatedly until sealed.
    #[endpoint(importState)]
    fn import_state(&self, entries: MultiValueEncoded<GenesisEntry<Self::Api>>) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_ONLY_OWNER
        );
        require!(!self.genesis_sealed().get(), ERR_GENESIS_SEALED);

        let mut dao_count = 0usize;
        for entry in entries.clone().into_iter() {
            if let GenesisEntry::Dao(dao) = entry {
                self.store_dao(&dao);
                dao_count += 1;
            }
        }

        let mut member_count = 0usize;
        for entry in entries.clone().into_iter() {
            if let GenesisEntry::Member(member) = entry {
                self.store_member(&member);
                member_count += 1;
            }
        }

        let mut proposal_count = 0usize;
        for entry in entries.clone().into_iter() {
            if let GenesisEntry::Proposal(proposal) = entry {
                self.store_proposal(&proposal);
                proposal_count += 1;
            }
        }

        let mut vote_count = 0usize;
        for entry in entries.into_iter() {
            if let GenesisEntry::Vote(vote) = entry {
                self.store_vote(&vote);
                vote_count += 1;
            }
        }

        self.genesis_imported_event(dao_count, member_count, proposal_count, vote_count);
    }

    /// Closes genesis import for good.
    #[only_owner]
    #[endpoint(sealGenesis)]
    fn seal_genesis(&self) {
        self.genesis_sealed().set(true);
    }
}
