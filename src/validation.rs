multiversx_sc::imports!();

use multiversx_sc::codec::TopDecode;

use crate::errors::*;
use crate::types::{ArticlesOfOrganization, CreateDaoRequest, ProposalType, TokenAmount};
use crate::MAX_NAME_LENGTH;

/// Structural checks on inbound commands. Everything here is a function of
/// the arguments (and the block time); nothing reads or writes storage.
#[multiversx_sc::module]
pub trait ValidationModule {
    fn validate_create_dao(
        &self,
        creator: &ManagedAddress,
        request: &CreateDaoRequest<Self::Api>,
        initial_members: &ManagedVec<ManagedAddress>,
        now: u64,
    ) {
        require!(!creator.is_zero(), ERR_EMPTY_CREATOR);
        require!(request.name.len() <= MAX_NAME_LENGTH, ERR_NAME_TOO_LONG);
        require!(self.has_statutory_suffix(&request.name), ERR_NAME_SUFFIX);
        require!(
            !request.public_identifier.is_empty(),
            ERR_EMPTY_PUBLIC_IDENTIFIER
        );
        require!(request.articles.is_complete(), ERR_INCOMPLETE_ARTICLES);
        if let Some(expiration_date) = request.expiration_date {
            require!(expiration_date > now, ERR_EXPIRATION_IN_PAST);
        }

        require!(!initial_members.is_empty(), ERR_NO_INITIAL_MEMBERS);
        for (idx, member) in initial_members.iter().enumerate() {
            require!(!member.is_zero(), ERR_EMPTY_INITIAL_MEMBER);
            for other in initial_members.iter().skip(idx + 1) {
                require!(*member != *other, ERR_DUPLICATE_INITIAL_MEMBER);
            }
        }
    }

    fn validate_join_dao(
        &self,
        dao_address: &ManagedAddress,
        member: &ManagedAddress,
        contribution: &ManagedVec<TokenAmount<Self::Api>>,
    ) {
        require!(!dao_address.is_zero(), ERR_EMPTY_DAO_ADDRESS);
        require!(!member.is_zero(), ERR_EMPTY_MEMBER_ADDRESS);
        for payment in contribution.iter() {
            require!(payment.token_nonce == 0, ERR_NON_FUNGIBLE_CONTRIBUTION);
            require!(payment.amount > 0u64, ERR_ZERO_CONTRIBUTION);
        }
    }

    fn validate_submit_proposal(
        &self,
        dao_address: &ManagedAddress,
        proposer: &ManagedAddress,
        title: &ManagedBuffer,
        proposal_type: ProposalType,
        voting_end: u64,
        execution_data: &ManagedBuffer,
        now: u64,
    ) {
        require!(!dao_address.is_zero(), ERR_EMPTY_DAO_ADDRESS);
        require!(!proposer.is_zero(), ERR_EMPTY_PROPOSER);
        require!(!title.is_empty(), ERR_EMPTY_TITLE);
        require!(voting_end > now, ERR_VOTING_END_NOT_FUTURE);

        if proposal_type == ProposalType::AmendArticles {
            let articles = self.decode_articles(execution_data);
            require!(articles.is_complete(), ERR_INVALID_AMENDMENT_PAYLOAD);
        }
    }

    fn validate_vote(&self, dao_address: &ManagedAddress, voter: &ManagedAddress) {
        require!(!dao_address.is_zero(), ERR_EMPTY_DAO_ADDRESS);
        require!(!voter.is_zero(), ERR_EMPTY_VOTER);
    }

    fn validate_withdraw(&self, dao_address: &ManagedAddress, member: &ManagedAddress) {
        require!(!dao_address.is_zero(), ERR_EMPTY_DAO_ADDRESS);
        require!(!member.is_zero(), ERR_EMPTY_MEMBER_ADDRESS);
    }

    /// The name must carry "DAO", "LAO" or "DAO LLC" somewhere in it.
    fn has_statutory_suffix(&self, name: &ManagedBuffer) -> bool {
        let len = name.len();
        if len > MAX_NAME_LENGTH {
            return false;
        }

        let mut buffer = [0u8; MAX_NAME_LENGTH];
        let bytes = &mut buffer[..len];
        if name.load_slice(0, bytes).is_err() {
            return false;
        }

        bytes.windows(3).any(|w| w == b"DAO" || w == b"LAO")
    }

    fn decode_articles(&self, payload: &ManagedBuffer) -> ArticlesOfOrganization<Self::Api> {
        ArticlesOfOrganization::top_decode(payload.clone())
            .unwrap_or_else(|_| sc_panic!(ERR_INVALID_AMENDMENT_PAYLOAD))
    }
}
