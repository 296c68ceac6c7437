multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// DAO: the registered organization
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum DaoStatus {
    Active,
    /// Terminal. Reached by a passed dissolve proposal, expiration,
    /// or one year without qualifying activity.
    Dissolved,
}

/// The eight statements the articles of organization must carry.
/// Every field is non-empty for as long as the DAO exists.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ArticlesOfOrganization<M: ManagedTypeApi> {
    pub statement_of_dao: ManagedBuffer<M>,
    pub management_statement: ManagedBuffer<M>,
    pub rights_and_duties_of_members: ManagedBuffer<M>,
    pub transferability_of_interests: ManagedBuffer<M>,
    pub withdrawal_rules: ManagedBuffer<M>,
    pub distribution_rules: ManagedBuffer<M>,
    pub amendment_procedures: ManagedBuffer<M>,
    pub dispute_resolution_rules: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> ArticlesOfOrganization<M> {
    pub fn is_complete(&self) -> bool {
        !self.statement_of_dao.is_empty()
            && !self.management_statement.is_empty()
            && !self.rights_and_duties_of_members.is_empty()
            && !self.transferability_of_interests.is_empty()
            && !self.withdrawal_rules.is_empty()
            && !self.distribution_rules.is_empty()
            && !self.amendment_procedures.is_empty()
            && !self.dispute_resolution_rules.is_empty()
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Dao<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub articles: ArticlesOfOrganization<M>,
    /// Empty when the DAO has no operating agreement
    pub operating_agreement: ManagedBuffer<M>,
    pub public_identifier: ManagedBuffer<M>,
    pub created_at: u64,
    pub expiration_date: Option<u64>,
    /// Block timestamp of the last qualifying action (inactivity rule)
    pub last_action_date: u64,
    pub status: DaoStatus,
}

impl<M: ManagedTypeApi> Dao<M> {
    pub fn is_active(&self) -> bool {
        self.status == DaoStatus::Active
    }
}

/// Arguments of `createDao` apart from the founding member list.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CreateDaoRequest<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub public_identifier: ManagedBuffer<M>,
    pub articles: ArticlesOfOrganization<M>,
    pub operating_agreement: ManagedBuffer<M>,
    pub expiration_date: Option<u64>,
}

// ============================================================
// Member: weighted interest in one DAO
// ============================================================

/// One fungible amount paid in on join.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct TokenAmount<M: ManagedTypeApi> {
    pub token_identifier: EgldOrEsdtTokenIdentifier<M>,
    pub token_nonce: u64,
    pub amount: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub dao_address: ManagedAddress<M>,
    /// Governance weight. Founders hold `INTEREST_UNIT`, joiners the sum
    /// of what they paid in.
    pub membership_interest: BigUint<M>,
    pub contribution: ManagedVec<M, TokenAmount<M>>,
    pub joined_at: u64,
}

// ============================================================
// Proposal: time-bounded governance question
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalType {
    /// Payload is the top-encoded replacement `ArticlesOfOrganization`.
    AmendArticles,
    Dissolve,
    /// Opaque payload forwarded to the registered action handler.
    GenericAction,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting is open until `voting_end`.
    Open,
    /// yes > no and quorum met. Waiting for execution.
    Passed,
    /// Terminal.
    Rejected,
    /// Terminal.
    Executed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub dao_address: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub proposal_type: ProposalType,
    pub proposer: ManagedAddress<M>,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub voting_end: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    pub executed: bool,
    pub execution_data: ManagedBuffer<M>,
}

// ============================================================
// Vote: one per (DAO, proposal, voter), last vote wins
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteOption {
    Yes,
    No,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Vote<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub dao_address: ManagedAddress<M>,
    pub proposal_id: u64,
    pub option: VoteOption,
    /// Voter's interest weight captured when the vote was cast
    pub voting_power: BigUint<M>,
}

// ============================================================
// Genesis
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum GenesisEntry<M: ManagedTypeApi> {
    Dao(Dao<M>),
    Member(Member<M>),
    Proposal(Proposal<M>),
    Vote(Vote<M>),
}
