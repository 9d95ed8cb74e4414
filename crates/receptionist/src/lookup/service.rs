use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::normalizer::{extract_employee_name, NameExtractionError};
use crate::directory::{EmployeeDirectory, EmployeeRecord, MatchOutcome};

pub const MISSING_NAME_MESSAGE: &str = "Employee name is required and could not be extracted from the request. Please provide the name of the employee you are looking for.";

/// Outcome of a single function-call lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(EmployeeRecord),
    NotFound(String),
    /// No usable name could be extracted from the request body.
    InvalidRequest,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Caller-facing explanation for unsuccessful lookups.
    pub fn error_message(&self) -> Option<String> {
        match self {
            LookupResult::Found(_) => None,
            LookupResult::NotFound(name) => Some(format!(
                "Employee \"{name}\" not found in our directory. Please check the spelling or try with a different name."
            )),
            LookupResult::InvalidRequest => Some(MISSING_NAME_MESSAGE.to_string()),
        }
    }
}

impl From<MatchOutcome> for LookupResult {
    fn from(value: MatchOutcome) -> Self {
        match value {
            MatchOutcome::Found(record) => LookupResult::Found(record),
            MatchOutcome::NotFound(name) => LookupResult::NotFound(name),
        }
    }
}

/// Normalize the request body and resolve the extracted name against the directory.
pub fn lookup_employee(directory: &EmployeeDirectory, body: &Value) -> LookupResult {
    let candidate = match extract_employee_name(body) {
        Ok(candidate) => candidate,
        Err(NameExtractionError::MissingName) => {
            info!("function call carried no usable employee name");
            return LookupResult::InvalidRequest;
        }
    };

    if candidate.source.is_lenient() {
        warn!(
            employee_name = %candidate.value,
            "no recognised request shape; using first string value as employee name"
        );
    } else {
        debug!(
            employee_name = %candidate.value,
            source = candidate.source.label(),
            "employee name extracted"
        );
    }

    let result = LookupResult::from(directory.resolve(&candidate.value));
    match &result {
        LookupResult::Found(record) => {
            info!(employee_id = %record.id.0, query = %candidate.value, "employee resolved")
        }
        _ => info!(query = %candidate.value, "employee not found in directory"),
    }
    result
}

/// Wire shape returned to the voice platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCallResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_info: Option<EmployeeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FunctionCallResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            employee_info: None,
            error: Some(message.into()),
        }
    }
}

impl From<LookupResult> for FunctionCallResponse {
    fn from(value: LookupResult) -> Self {
        let error = value.error_message();
        match value {
            LookupResult::Found(record) => Self {
                success: true,
                employee_info: Some(record),
                error: None,
            },
            LookupResult::NotFound(_) | LookupResult::InvalidRequest => Self {
                success: false,
                employee_info: None,
                error,
            },
        }
    }
}
