// Every message starts with its error kind so callers can surface it verbatim.

// ── InvalidRequest ──

pub const ERR_EMPTY_CREATOR: &str = "InvalidRequest: creator address cannot be empty";
pub const ERR_NAME_SUFFIX: &str =
    "InvalidRequest: DAO name must include 'DAO', 'LAO' or 'DAO LLC'";
pub const ERR_NAME_TOO_LONG: &str = "InvalidRequest: DAO name is too long";
pub const ERR_EMPTY_PUBLIC_IDENTIFIER: &str = "InvalidRequest: public identifier cannot be empty";
pub const ERR_INCOMPLETE_ARTICLES: &str =
    "InvalidRequest: all articles of organization statements are required";
pub const ERR_NO_INITIAL_MEMBERS: &str = "InvalidRequest: DAO must have at least one member";
pub const ERR_EMPTY_INITIAL_MEMBER: &str = "InvalidRequest: initial member address cannot be empty";
pub const ERR_EXPIRATION_IN_PAST: &str = "InvalidRequest: expiration date must be in the future";
pub const ERR_EMPTY_DAO_ADDRESS: &str = "InvalidRequest: DAO address cannot be empty";
pub const ERR_EMPTY_MEMBER_ADDRESS: &str = "InvalidRequest: member address cannot be empty";
pub const ERR_NON_FUNGIBLE_CONTRIBUTION: &str = "InvalidRequest: contribution must be fungible";
pub const ERR_ZERO_CONTRIBUTION: &str = "InvalidRequest: contribution amounts must be positive";
pub const ERR_CONTRIBUTION_TOO_SMALL: &str =
    "InvalidRequest: contribution too small for a pool share";
pub const ERR_EMPTY_PROPOSER: &str = "InvalidRequest: proposer address cannot be empty";
pub const ERR_EMPTY_TITLE: &str = "InvalidRequest: proposal title cannot be empty";
pub const ERR_VOTING_END_NOT_FUTURE: &str = "InvalidRequest: voting end must be in the future";
pub const ERR_INVALID_AMENDMENT_PAYLOAD: &str =
    "InvalidRequest: amendment payload must encode complete articles";
pub const ERR_EMPTY_VOTER: &str = "InvalidRequest: voter address cannot be empty";
pub const ERR_PROPOSAL_ID_OUT_OF_RANGE: &str = "InvalidRequest: proposal id out of range";
pub const ERR_INVALID_QUORUM: &str = "InvalidRequest: quorum cannot exceed 100%";

// ── NotFound ──

pub const ERR_DAO_NOT_FOUND: &str = "NotFound: DAO does not exist";
pub const ERR_MEMBER_NOT_FOUND: &str = "NotFound: member does not exist";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "NotFound: proposal does not exist";
pub const ERR_VOTE_NOT_FOUND: &str = "NotFound: vote does not exist";
pub const ERR_NOT_A_MEMBER: &str = "NotFound: caller is not a member of the DAO";

// ── Conflict ──

pub const ERR_DAO_EXISTS: &str = "Conflict: DAO already exists";
pub const ERR_ALREADY_MEMBER: &str = "Conflict: address is already a member";
pub const ERR_DUPLICATE_INITIAL_MEMBER: &str = "Conflict: initial member listed twice";
pub const ERR_ALREADY_EXECUTED: &str = "Conflict: proposal already executed";

// ── Unauthorized ──

pub const ERR_ONLY_OWNER: &str = "Unauthorized: only the owner can import genesis state";

// ── InvalidState ──

pub const ERR_DAO_DISSOLVED: &str = "InvalidState: DAO is dissolved";
pub const ERR_PROPOSAL_CLOSED: &str = "InvalidState: proposal is not open";
pub const ERR_VOTING_ENDED: &str = "InvalidState: voting period has ended";
pub const ERR_VOTING_NOT_ENDED: &str = "InvalidState: voting period has not ended";
pub const ERR_NOT_PASSED: &str = "InvalidState: proposal has not passed";
pub const ERR_NO_ACTION_HANDLER: &str = "InvalidState: no action handler registered";
pub const ERR_GENESIS_SEALED: &str = "InvalidState: genesis import is sealed";
