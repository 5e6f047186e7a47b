use crate::domain::model::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseState {
    AwaitingPayment,
    AwaitingHwfDecision,
    Submitted,
    Issued,
    PendingRejection,
    AwaitingDocuments,
    AwaitingReissue,
    AmendPetition,
    AosAwaiting,
    AosStarted,
    AosOverdue,
    AosSubmittedAwaitingAnswer,
    AosCompleted,
    AwaitingDecreeNisi,
    DnAwaiting,
    DefendedDivorce,
    AwaitingLegalAdvisorReferral,
    AwaitingConsideration,
    AwaitingClarification,
    ClarificationSubmitted,
    AwaitingPronouncement,
    DnPronounced,
    AwaitingDecreeAbsolute,
    DaRequested,
    DivorceGranted,
    Rejected,
    Unknown,
}

const KNOWN_STATES: &[(CaseState, &str)] = &[
    (CaseState::AwaitingPayment, "AwaitingPayment"),
    (CaseState::AwaitingHwfDecision, "AwaitingHWFDecision"),
    (CaseState::Submitted, "Submitted"),
    (CaseState::Issued, "Issued"),
    (CaseState::PendingRejection, "PendingRejection"),
    (CaseState::AwaitingDocuments, "AwaitingDocuments"),
    (CaseState::AwaitingReissue, "AwaitingReissue"),
    (CaseState::AmendPetition, "AmendPetition"),
    (CaseState::AosAwaiting, "AosAwaiting"),
    (CaseState::AosStarted, "AosStarted"),
    (CaseState::AosOverdue, "AosOverdue"),
    (CaseState::AosSubmittedAwaitingAnswer, "AosSubmittedAwaitingAnswer"),
    (CaseState::AosCompleted, "AosCompleted"),
    (CaseState::AwaitingDecreeNisi, "AwaitingDecreeNisi"),
    (CaseState::DnAwaiting, "DNAwaiting"),
    (CaseState::DefendedDivorce, "DefendedDivorce"),
    (CaseState::AwaitingLegalAdvisorReferral, "AwaitingLegalAdvisorReferral"),
    (CaseState::AwaitingConsideration, "AwaitingConsideration"),
    (CaseState::AwaitingClarification, "AwaitingClarification"),
    (CaseState::ClarificationSubmitted, "ClarificationSubmitted"),
    (CaseState::AwaitingPronouncement, "AwaitingPronouncement"),
    (CaseState::DnPronounced, "DNPronounced"),
    (CaseState::AwaitingDecreeAbsolute, "AwaitingDecreeAbsolute"),
    (CaseState::DaRequested, "DARequested"),
    (CaseState::DivorceGranted, "DivorceGranted"),
    (CaseState::Rejected, "Rejected"),
];

impl CaseState {
    /// 狀態字串比對不分大小寫，未知狀態回傳 `Unknown`
    pub fn parse(value: &str) -> Self {
        KNOWN_STATES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(value))
            .map(|(state, _)| *state)
            .unwrap_or(CaseState::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        KNOWN_STATES
            .iter()
            .find(|(state, _)| state == self)
            .map(|(_, name)| *name)
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStateGrouping {
    Incomplete,
    Complete,
    Amend,
    Unknown,
}

const PETITIONER_INCOMPLETE: &[CaseState] =
    &[CaseState::AwaitingPayment, CaseState::AwaitingHwfDecision];

const PETITIONER_COMPLETE: &[CaseState] = &[
    CaseState::Submitted,
    CaseState::Issued,
    CaseState::PendingRejection,
    CaseState::AwaitingDocuments,
    CaseState::AwaitingReissue,
    CaseState::AosAwaiting,
    CaseState::AosStarted,
    CaseState::AosOverdue,
    CaseState::AosSubmittedAwaitingAnswer,
    CaseState::AosCompleted,
    CaseState::AwaitingDecreeNisi,
    CaseState::DnAwaiting,
    CaseState::DefendedDivorce,
    CaseState::AwaitingLegalAdvisorReferral,
    CaseState::AwaitingConsideration,
    CaseState::AwaitingClarification,
    CaseState::ClarificationSubmitted,
    CaseState::AwaitingPronouncement,
    CaseState::DnPronounced,
    CaseState::AwaitingDecreeAbsolute,
    CaseState::DaRequested,
    CaseState::DivorceGranted,
    CaseState::Rejected,
];

const PETITIONER_AMEND: &[CaseState] = &[CaseState::AmendPetition];

// Respondents only see a case once it has been issued to them.
const RESPONDENT_COMPLETE: &[CaseState] = &[
    CaseState::AosAwaiting,
    CaseState::AosStarted,
    CaseState::AosOverdue,
    CaseState::AosSubmittedAwaitingAnswer,
    CaseState::AosCompleted,
    CaseState::AwaitingDecreeNisi,
    CaseState::DnAwaiting,
    CaseState::DefendedDivorce,
    CaseState::AwaitingLegalAdvisorReferral,
    CaseState::AwaitingConsideration,
    CaseState::AwaitingClarification,
    CaseState::ClarificationSubmitted,
    CaseState::AwaitingPronouncement,
    CaseState::DnPronounced,
    CaseState::AwaitingDecreeAbsolute,
    CaseState::DaRequested,
    CaseState::DivorceGranted,
];

/// Static state-to-group table for one role.
#[derive(Debug, Clone, Copy)]
pub struct StateGroupingTable {
    incomplete: &'static [CaseState],
    complete: &'static [CaseState],
    amend: &'static [CaseState],
}

impl StateGroupingTable {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Petitioner => Self {
                incomplete: PETITIONER_INCOMPLETE,
                complete: PETITIONER_COMPLETE,
                amend: PETITIONER_AMEND,
            },
            Role::Respondent => Self {
                incomplete: &[],
                complete: RESPONDENT_COMPLETE,
                amend: &[],
            },
        }
    }

    pub fn group_of(&self, state: Option<&str>) -> CaseStateGrouping {
        let state = match state {
            Some(s) => CaseState::parse(s),
            None => return CaseStateGrouping::Unknown,
        };

        if self.complete.contains(&state) {
            CaseStateGrouping::Complete
        } else if self.amend.contains(&state) {
            CaseStateGrouping::Amend
        } else if self.incomplete.contains(&state) {
            CaseStateGrouping::Incomplete
        } else {
            CaseStateGrouping::Unknown
        }
    }
}
