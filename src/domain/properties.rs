//! Field names shared with the case data store and the divorce session format,
//! plus the removal tables used when an amendment draft is built.

// Storage (case data store) format
pub const D8_CASE_REFERENCE: &str = "D8caseReference";
pub const D8_REASON_FOR_DIVORCE: &str = "D8ReasonForDivorce";
pub const PREVIOUS_REASONS_DIVORCE: &str = "PreviousReasonsForDivorce";
pub const PREVIOUS_REASONS_DIVORCE_REFUSAL: &str = "PreviousReasonsForDivorceRefusal";
pub const ISSUE_DATE: &str = "IssueDate";
pub const PREVIOUS_ISSUE_DATE: &str = "PreviousIssueDate";
pub const D8_DIVORCE_UNIT: &str = "D8DivorceUnit";
pub const HELP_WITH_FEES_NEED_HELP: &str = "D8HelpWithFeesNeedHelp";
pub const REFUSAL_ORDER_REJECTION_REASONS: &str = "RefusalRejectionReason";
pub const RESP_LETTER_HOLDER_ID: &str = "AosLetterHolderId";
pub const CO_RESP_LETTER_HOLDER_ID: &str = "CoRespLetterHolderId";
pub const RESP_EMAIL_ADDRESS: &str = "RespEmailAddress";
pub const CO_RESP_EMAIL_ADDRESS: &str = "CoRespEmailAddress";

// Divorce session format
pub const PREVIOUS_CASE_ID: &str = "previousCaseId";
pub const PREVIOUS_REASONS_FOR_DIVORCE: &str = "previousReasonsForDivorce";
pub const PREVIOUS_REASONS_FOR_DIVORCE_REFUSAL: &str = "previousReasonsForDivorceRefusal";
pub const IS_DRAFT_KEY: &str = "fetchedDraft";

pub const CTSC_SERVICE_CENTRE: &str = "serviceCentre";
pub const YES_VALUE: &str = "YES";

pub const REJECTION_NO_JURISDICTION: &str = "noJurisdiction";
pub const REJECTION_NO_CRITERIA: &str = "noCriteria";
pub const REJECTION_INSUFFICIENT_DETAILS: &str = "insufficentDetails";

/// Dropped from a case before it becomes an amendment draft.
pub const AMEND_REMOVED_PROPS: &[&str] = &[
    "D8caseReference",
    "D8ReasonForDivorce",
    "D8ReasonForDivorceBehaviourDetails",
    "D8ReasonForDivorceDesertionDate",
    "D8ReasonForDivorceDesertionAgreed",
    "D8ReasonForDivorceDesertionDetails",
    "D8ReasonForDivorceSeperationDate",
    "D8ReasonForDivorceAdulteryDetails",
    "D8ReasonForDivorceAdulteryWishToName",
    "D8ReasonForDivorceAdultery3rdPartyFName",
    "D8ReasonForDivorceAdultery3rdPartyLName",
    "D8ReasonForDivorceAdultery3rdAddress",
    "D8ReasonForDivorceAdulteryIsNamed",
    "D8DocumentsUploaded",
    "D8DocumentsGenerated",
    "D8StatementOfTruth",
    "D8Connections",
    "D8ConnectionSummary",
    "D8DivorceCostsClaim",
    "D8FinancialOrder",
    "D8LegalProceedings",
    "IssueDate",
    "PreviousReasonsForDivorce",
    "AosLetterHolderId",
    "CoRespLetterHolderId",
    "RespEmailAddress",
    "CoRespEmailAddress",
    "ReceivedAOSfromResp",
    "ReceivedAOSfromRespDate",
    "ReceivedAosFromCoResp",
    "ReceivedAosFromCoRespDate",
    "DueDate",
    "Payments",
    "D8HelpWithFeesReferenceNumber",
    "D8HelpWithFeesNeedHelp",
    "D8PaymentMethod",
    "RefusalRejectionReason",
    "RefusalClarificationReason",
];

/// Dropped for every refusal-driven amendment. Reasons and connections stay
/// unless the refusal reasons say otherwise.
pub const REFUSAL_REMOVED_PROPS: &[&str] = &[
    "D8caseReference",
    "D8DocumentsUploaded",
    "D8DocumentsGenerated",
    "D8StatementOfTruth",
    "IssueDate",
    "PreviousReasonsForDivorceRefusal",
    "AosLetterHolderId",
    "CoRespLetterHolderId",
    "RespEmailAddress",
    "CoRespEmailAddress",
    "ReceivedAOSfromResp",
    "ReceivedAOSfromRespDate",
    "ReceivedAosFromCoResp",
    "ReceivedAosFromCoRespDate",
    "DueDate",
    "Payments",
    "D8HelpWithFeesReferenceNumber",
    "D8PaymentMethod",
    "RefusalClarificationReason",
];

/// Dropped when the refusal was for lack of jurisdiction.
pub const REFUSAL_JURISDICTION_REMOVED_PROPS: &[&str] = &[
    "D8Connections",
    "D8ConnectionSummary",
    "D8JurisdictionConnection",
    "D8JurisdictionConnectionNewPolicy",
    "D8JurisdictionPetitionerResidence",
    "D8JurisdictionRespondentResidence",
    "D8JurisdictionPetitionerDomicile",
    "D8JurisdictionRespondentDomicile",
    "D8JurisdictionLastTwelveMonths",
    "D8JurisdictionHabituallyResLast6Months",
    "D8ResidualJurisdictionEligible",
];

/// Dropped when the refusal concerned the divorce facts themselves.
pub const REFUSAL_ABOUT_DIVORCE_REMOVED_PROPS: &[&str] = &[
    "D8ReasonForDivorce",
    "D8ReasonForDivorceBehaviourDetails",
    "D8ReasonForDivorceDesertionDate",
    "D8ReasonForDivorceDesertionAgreed",
    "D8ReasonForDivorceDesertionDetails",
    "D8ReasonForDivorceSeperationDate",
    "D8ReasonForDivorceAdulteryDetails",
    "D8ReasonForDivorceAdulteryWishToName",
    "D8ReasonForDivorceAdultery3rdPartyFName",
    "D8ReasonForDivorceAdultery3rdPartyLName",
    "D8ReasonForDivorceAdultery3rdAddress",
    "D8ReasonForDivorceAdulteryIsNamed",
    "D8ReasonForDivorceAdulteryKnowWhen",
    "D8ReasonForDivorceAdulteryKnowWhere",
    "D8ReasonForDivorceAdulteryWhenDetails",
    "D8ReasonForDivorceAdulteryWhereDetails",
];
