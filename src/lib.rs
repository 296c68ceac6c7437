#![no_std]

multiversx_sc::imports!();

pub mod action_handler_proxy;
pub mod errors;
pub mod events;
pub mod genesis;
pub mod storage;
pub mod sweep;
pub mod tally;
pub mod types;
pub mod validation;

use errors::*;
use types::{
    ArticlesOfOrganization, CreateDaoRequest, Dao, DaoStatus, Member, Proposal, ProposalStatus,
    ProposalType, TokenAmount, Vote, VoteOption,
};

// ============================================================
// Constants
// ============================================================

/// One year without qualifying activity dissolves a DAO
pub const INACTIVITY_PERIOD: u64 = 365 * 24 * 60 * 60;

/// Governance weight of each founder
pub const INTEREST_UNIT: u64 = 1_000_000_000_000_000_000;

/// Basis points denominator (quorum is expressed in bps of total interest)
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_NAME_LENGTH: usize = 256;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DaoRegistry:
    storage::StorageModule
    + events::EventsModule
    + validation::ValidationModule
    + tally::TallyModule
    + sweep::SweepModule
    + genesis::GenesisModule
{
    // ========================================================
    // Init / Upgrade / Configuration
    // ========================================================

    /// `quorum_bps`: minimum cast weight, in basis points of the DAO's
    /// total interest, for a proposal to pass. Defaults to no quorum.
    #[init]
    fn init(&self, quorum_bps: OptionalValue<u64>) {
        let quorum_bps = quorum_bps.into_option().unwrap_or(0);
        require!(quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_QUORUM);
        self.quorum_bps().set(quorum_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setQuorumBps)]
    fn set_quorum_bps(&self, quorum_bps: u64) {
        require!(quorum_bps <= BPS_DENOMINATOR, ERR_INVALID_QUORUM);
        self.quorum_bps().set(quorum_bps);
    }

    #[only_owner]
    #[endpoint(setActionHandler)]
    fn set_action_handler(&self, handler: ManagedAddress) {
        self.action_handler().set(&handler);
    }

    // ========================================================
    // ENDPOINT: createDao
    // Registers the DAO and its founders (equal interest each).
    // ========================================================

    #[endpoint(createDao)]
    fn create_dao(
        &self,
        request: CreateDaoRequest<Self::Api>,
        initial_members: MultiValueEncoded<ManagedAddress>,
    ) -> ManagedAddress {
        let creator = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let initial_members = initial_members.to_vec();

        self.validate_create_dao(&creator, &request, &initial_members, now);

        let dao_address = self.compute_dao_address(creator.clone(), request.name.clone());
        require!(self.daos(&dao_address).is_empty(), ERR_DAO_EXISTS);

        let dao = Dao {
            address: dao_address.clone(),
            name: request.name,
            description: request.description,
            articles: request.articles,
            operating_agreement: request.operating_agreement,
            public_identifier: request.public_identifier,
            created_at: now,
            expiration_date: request.expiration_date,
            last_action_date: now,
            status: DaoStatus::Active,
        };
        self.store_dao(&dao);

        for founder in initial_members.iter() {
            let member = Member {
                address: founder.clone_value(),
                dao_address: dao_address.clone(),
                membership_interest: BigUint::from(INTEREST_UNIT),
                contribution: ManagedVec::new(),
                joined_at: now,
            };
            self.store_member(&member);
            self.member_joined_event(&dao_address, &member.address, &member.membership_interest);
        }

        self.dao_created_event(&dao_address, &creator, now, &dao.name);

        dao_address
    }

    // ========================================================
    // ENDPOINT: joinDao
    // Fungible payments are pooled against pool shares. Interest is
    // the amount paid in; joining empty-handed carries no weight.
    // ========================================================

    #[payable("*")]
    #[endpoint(joinDao)]
    fn join_dao(&self, dao_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let contribution = self.received_contribution();

        self.validate_join_dao(&dao_address, &caller, &contribution);

        let mut dao = self.require_active_dao(&dao_address);
        require!(
            self.members(&dao_address, &caller).is_empty(),
            ERR_ALREADY_MEMBER
        );

        let mut membership_interest = BigUint::zero();
        for payment in contribution.iter() {
            self.mint_pool_shares(
                &dao_address,
                &caller,
                &payment.token_identifier,
                &payment.amount,
            );
            membership_interest += &payment.amount;
        }

        let member = Member {
            address: caller.clone(),
            dao_address: dao_address.clone(),
            membership_interest,
            contribution,
            joined_at: now,
        };
        self.store_member(&member);
        self.touch_dao(&mut dao, now);

        self.member_joined_event(&dao_address, &caller, &member.membership_interest);
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // Any member can propose. Ids are sequential per DAO from 0.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        dao_address: ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        proposal_type: ProposalType,
        voting_end: u64,
        execution_data: OptionalValue<ManagedBuffer>,
    ) -> u64 {
        let execution_data = execution_data
            .into_option()
            .unwrap_or_else(ManagedBuffer::new);

        self.open_proposal(
            dao_address,
            title,
            description,
            proposal_type,
            voting_end,
            execution_data,
        )
    }

    #[endpoint(proposeArticlesAmendment)]
    fn propose_articles_amendment(
        &self,
        dao_address: ManagedAddress,
        title: ManagedBuffer,
        articles: ArticlesOfOrganization<Self::Api>,
        voting_end: u64,
    ) -> u64 {
        require!(articles.is_complete(), ERR_INCOMPLETE_ARTICLES);
        let payload = self.serializer().top_encode_to_managed_buffer(&articles);

        self.open_proposal(
            dao_address,
            title,
            ManagedBuffer::new(),
            ProposalType::AmendArticles,
            voting_end,
            payload,
        )
    }

    #[endpoint(proposeDissolution)]
    fn propose_dissolution(
        &self,
        dao_address: ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        voting_end: u64,
    ) -> u64 {
        self.open_proposal(
            dao_address,
            title,
            description,
            ProposalType::Dissolve,
            voting_end,
            ManagedBuffer::new(),
        )
    }

    // ========================================================
    // ENDPOINT: vote
    // Last vote wins. Totals are recounted from the stored votes.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, dao_address: ManagedAddress, proposal_id: u64, option: VoteOption) {
        let voter = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.validate_vote(&dao_address, &voter);

        let mut dao = self.require_active_dao(&dao_address);
        let mut proposal = self
            .load_proposal(&dao_address, proposal_id)
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_NOT_FOUND));
        require!(
            proposal.status == ProposalStatus::Open,
            ERR_PROPOSAL_CLOSED
        );
        require!(now < proposal.voting_end, ERR_VOTING_ENDED);

        let member = self
            .load_member(&dao_address, &voter)
            .unwrap_or_else(|| sc_panic!(ERR_NOT_A_MEMBER));

        let vote = Vote {
            voter: voter.clone(),
            dao_address: dao_address.clone(),
            proposal_id,
            option,
            voting_power: member.membership_interest,
        };
        self.store_vote(&vote);

        let (yes_votes, no_votes) = self.recount_votes(&dao_address, proposal_id);
        proposal.yes_votes = yes_votes;
        proposal.no_votes = no_votes;
        self.store_proposal(&proposal);
        self.touch_dao(&mut dao, now);

        self.vote_cast_event(&dao_address, proposal_id, &voter, option, &vote.voting_power);
    }

    // ========================================================
    // ENDPOINT: tallyProposal
    // Anyone may finalize once voting has ended. Idempotent.
    // ========================================================

    #[endpoint(tallyProposal)]
    fn tally_proposal(&self, dao_address: ManagedAddress, proposal_id: u64) -> ProposalStatus {
        let now = self.blockchain().get_block_timestamp();
        let mut proposal = self
            .load_proposal(&dao_address, proposal_id)
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_NOT_FOUND));

        if proposal.status == ProposalStatus::Open {
            require!(now >= proposal.voting_end, ERR_VOTING_NOT_ENDED);
            self.tally(&mut proposal, now);
        }

        proposal.status
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Members only. Tallies first if the proposal is still open.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, dao_address: ManagedAddress, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut dao = self.require_active_dao(&dao_address);
        require!(
            !self.members(&dao_address, &caller).is_empty(),
            ERR_NOT_A_MEMBER
        );

        let mut proposal = self
            .load_proposal(&dao_address, proposal_id)
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_NOT_FOUND));
        self.tally(&mut proposal, now);

        require!(
            !proposal.executed && proposal.status != ProposalStatus::Executed,
            ERR_ALREADY_EXECUTED
        );
        require!(proposal.status == ProposalStatus::Passed, ERR_NOT_PASSED);

        match proposal.proposal_type {
            ProposalType::AmendArticles => {
                let articles = self.decode_articles(&proposal.execution_data);
                require!(articles.is_complete(), ERR_INVALID_AMENDMENT_PAYLOAD);
                dao.articles = articles;
                self.articles_amended_event(&dao_address, proposal_id);
            },
            ProposalType::Dissolve => {
                dao.status = DaoStatus::Dissolved;
                self.dao_dissolved_event(&dao_address, proposal_id);
            },
            ProposalType::GenericAction => {
                require!(!self.action_handler().is_empty(), ERR_NO_ACTION_HANDLER);
            },
        }

        proposal.executed = true;
        proposal.status = ProposalStatus::Executed;
        self.store_proposal(&proposal);
        self.touch_dao(&mut dao, now);

        // Handler runs after our writes; a failure reverts all of them.
        if proposal.proposal_type == ProposalType::GenericAction {
            let handler = self.action_handler().get();
            self.tx()
                .to(&handler)
                .typed(action_handler_proxy::ActionHandlerProxy)
                .handle_action(dao_address.clone(), proposal_id, proposal.execution_data.clone())
                .sync_call();
        }

        self.proposal_executed_event(&dao_address, proposal_id, proposal.proposal_type);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Redeems the member's pool shares of every token they paid in,
    // then removes the membership. Allowed on dissolved DAOs.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, dao_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.validate_withdraw(&dao_address, &caller);

        let mut dao = self
            .load_dao(&dao_address)
            .unwrap_or_else(|| sc_panic!(ERR_DAO_NOT_FOUND));
        let member = self
            .load_member(&dao_address, &caller)
            .unwrap_or_else(|| sc_panic!(ERR_MEMBER_NOT_FOUND));

        for paid_in in member.contribution.iter() {
            let payout =
                self.redeem_pool_shares(&dao_address, &caller, &paid_in.token_identifier);
            if payout > 0u64 {
                self.send()
                    .direct(&caller, &paid_in.token_identifier, 0, &payout);
            }
        }

        self.remove_member(&member);
        self.touch_dao(&mut dao, now);

        self.member_withdrawn_event(&dao_address, &caller, &member.membership_interest);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn open_proposal(
        &self,
        dao_address: ManagedAddress,
        title: ManagedBuffer,
        description: ManagedBuffer,
        proposal_type: ProposalType,
        voting_end: u64,
        execution_data: ManagedBuffer,
    ) -> u64 {
        let proposer = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        self.validate_submit_proposal(
            &dao_address,
            &proposer,
            &title,
            proposal_type,
            voting_end,
            &execution_data,
            now,
        );

        let mut dao = self.require_active_dao(&dao_address);
        require!(
            !self.members(&dao_address, &proposer).is_empty(),
            ERR_NOT_A_MEMBER
        );

        let proposal_id = self.next_proposal_id(&dao_address).get();
        let proposal = Proposal {
            id: proposal_id,
            dao_address: dao_address.clone(),
            title,
            description,
            proposal_type,
            proposer: proposer.clone(),
            status: ProposalStatus::Open,
            created_at: now,
            voting_end,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            executed: false,
            execution_data,
        };
        self.store_proposal(&proposal);
        self.touch_dao(&mut dao, now);

        self.proposal_submitted_event(&dao_address, proposal_id, &proposer, proposal_type, voting_end);

        proposal_id
    }

    fn require_active_dao(&self, dao_address: &ManagedAddress) -> Dao<Self::Api> {
        let dao = self
            .load_dao(dao_address)
            .unwrap_or_else(|| sc_panic!(ERR_DAO_NOT_FOUND));
        require!(dao.is_active(), ERR_DAO_DISSOLVED);
        dao
    }

    /// Records a qualifying action for the inactivity rule.
    fn touch_dao(&self, dao: &mut Dao<Self::Api>, now: u64) {
        dao.last_action_date = now;
        self.store_dao(dao);
    }

    fn received_contribution(&self) -> ManagedVec<Self::Api, TokenAmount<Self::Api>> {
        let mut contribution = ManagedVec::new();
        match self.call_value().any_payment() {
            EgldOrMultiEsdtPayment::Egld(amount) => {
                if amount > 0u64 {
                    contribution.push(TokenAmount {
                        token_identifier: EgldOrEsdtTokenIdentifier::egld(),
                        token_nonce: 0,
                        amount,
                    });
                }
            },
            EgldOrMultiEsdtPayment::MultiEsdt(payments) => {
                for payment in payments.iter() {
                    contribution.push(TokenAmount {
                        token_identifier: EgldOrEsdtTokenIdentifier::esdt(
                            payment.token_identifier.clone(),
                        ),
                        token_nonce: payment.token_nonce,
                        amount: payment.amount.clone(),
                    });
                }
            },
        }
        contribution
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(computeDaoAddress)]
    fn compute_dao_address(&self, creator: ManagedAddress, name: ManagedBuffer) -> ManagedAddress {
        let mut seed = ManagedBuffer::new();
        seed.append(creator.as_managed_buffer());
        seed.append(&name);
        ManagedAddress::from(self.crypto().keccak256(&seed))
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue4<u64, u64, ManagedAddress, bool> {
        let handler = if self.action_handler().is_empty() {
            ManagedAddress::zero()
        } else {
            self.action_handler().get()
        };
        (
            self.quorum_bps().get(),
            INACTIVITY_PERIOD,
            handler,
            self.genesis_sealed().get(),
        )
            .into()
    }
}
