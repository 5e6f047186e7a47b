//! Builds amendment drafts out of previously submitted cases.
//!
//! The builders are pure: they read a case, work on a copy of its data and
//! return the stripped storage-format data together with the history that has
//! to be attached once the data is in its final format.

use crate::domain::model::{CaseData, CaseDetails};
use crate::domain::properties::{
    AMEND_REMOVED_PROPS, CTSC_SERVICE_CENTRE, D8_DIVORCE_UNIT, D8_REASON_FOR_DIVORCE, ISSUE_DATE,
    PREVIOUS_CASE_ID, PREVIOUS_ISSUE_DATE, PREVIOUS_REASONS_DIVORCE,
    PREVIOUS_REASONS_DIVORCE_REFUSAL, PREVIOUS_REASONS_FOR_DIVORCE,
    PREVIOUS_REASONS_FOR_DIVORCE_REFUSAL, REFUSAL_ABOUT_DIVORCE_REMOVED_PROPS,
    REFUSAL_JURISDICTION_REMOVED_PROPS, REFUSAL_ORDER_REJECTION_REASONS, REFUSAL_REMOVED_PROPS,
    REJECTION_INSUFFICIENT_DETAILS, REJECTION_NO_CRITERIA, REJECTION_NO_JURISDICTION,
};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct AmendmentDraft {
    /// Storage-format data with the amendment rules applied.
    pub data: CaseData,
    pub previous_case_id: String,
    pub previous_reasons: Vec<Value>,
    reasons_key: &'static str,
}

impl AmendmentDraft {
    /// Attach the case history to data that is already in its final format.
    pub fn finish(&self, mut formatted: CaseData) -> CaseData {
        formatted.insert(
            PREVIOUS_CASE_ID.to_string(),
            Value::String(self.previous_case_id.clone()),
        );
        formatted.insert(
            self.reasons_key.to_string(),
            Value::Array(self.previous_reasons.clone()),
        );
        formatted
    }

    /// Finish without a format change.
    pub fn into_storage_format(self) -> CaseData {
        let data = self.data.clone();
        self.finish(data)
    }
}

/// A case sent back for amendment by a caseworker.
pub fn prepare_amendment(case: &CaseDetails) -> AmendmentDraft {
    let mut data = case.data.clone();
    let previous_reasons = previous_reasons(&data, PREVIOUS_REASONS_DIVORCE);

    carry_issue_date(&mut data);
    remove_all(&mut data, AMEND_REMOVED_PROPS);
    data.insert(
        D8_DIVORCE_UNIT.to_string(),
        Value::String(CTSC_SERVICE_CENTRE.to_string()),
    );

    AmendmentDraft {
        data,
        previous_case_id: case.id_string(),
        previous_reasons,
        reasons_key: PREVIOUS_REASONS_FOR_DIVORCE,
    }
}

/// A case refused by the court; what is stripped depends on the refusal reasons.
pub fn prepare_refusal_amendment(case: &CaseDetails) -> AmendmentDraft {
    let mut data = case.data.clone();
    let previous_reasons = previous_reasons(&data, PREVIOUS_REASONS_DIVORCE_REFUSAL);

    carry_issue_date(&mut data);
    remove_all(&mut data, REFUSAL_REMOVED_PROPS);
    data.insert(
        D8_DIVORCE_UNIT.to_string(),
        Value::String(CTSC_SERVICE_CENTRE.to_string()),
    );

    let reasons = rejection_reasons(&data);
    if reasons.iter().any(|r| r == REJECTION_NO_JURISDICTION) {
        remove_all(&mut data, REFUSAL_JURISDICTION_REMOVED_PROPS);
    }
    if reasons
        .iter()
        .any(|r| r == REJECTION_NO_CRITERIA || r == REJECTION_INSUFFICIENT_DETAILS)
    {
        remove_all(&mut data, REFUSAL_ABOUT_DIVORCE_REMOVED_PROPS);
    }

    AmendmentDraft {
        data,
        previous_case_id: case.id_string(),
        previous_reasons,
        reasons_key: PREVIOUS_REASONS_FOR_DIVORCE_REFUSAL,
    }
}

fn previous_reasons(data: &CaseData, history_key: &str) -> Vec<Value> {
    let mut reasons = match data.get(history_key) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    };

    // a case without a reason has nothing to add to the history
    if let Some(current) = data.get(D8_REASON_FOR_DIVORCE).filter(|v| !v.is_null()) {
        reasons.push(current.clone());
    }
    reasons
}

fn carry_issue_date(data: &mut CaseData) {
    if let Some(issue_date) = data.get(ISSUE_DATE).filter(|v| !v.is_null()).cloned() {
        data.insert(PREVIOUS_ISSUE_DATE.to_string(), issue_date);
    }
}

fn rejection_reasons(data: &CaseData) -> Vec<String> {
    match data.get(REFUSAL_ORDER_REJECTION_REASONS) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

fn remove_all(data: &mut CaseData, keys: &[&str]) {
    for key in keys {
        data.remove(*key);
    }
}
