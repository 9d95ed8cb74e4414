use serde_json::Value;

/// Which request shape supplied the candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// `{ "employee_name": "..." }`
    EmployeeName,
    /// `{ "parameters": { "employee_name": "..." } }`
    Parameters,
    /// `{ "args": ["...", ...] }`
    Args,
    /// First non-blank string among the top-level values.
    FirstStringValue,
}

impl NameSource {
    pub fn label(&self) -> &'static str {
        match self {
            NameSource::EmployeeName => "employee_name",
            NameSource::Parameters => "parameters.employee_name",
            NameSource::Args => "args[0]",
            NameSource::FirstStringValue => "first_string_value",
        }
    }

    /// The last-resort scan can pick up unrelated fields such as a stray note or id.
    pub fn is_lenient(&self) -> bool {
        matches!(self, NameSource::FirstStringValue)
    }
}

/// Trimmed, non-empty name pulled out of a function-call body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateName {
    pub value: String,
    pub source: NameSource,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameExtractionError {
    #[error("employee name is required and could not be extracted")]
    MissingName,
}

/// Extract the employee name from a loosely shaped request body.
///
/// Shapes are tried in priority order and blank values fall through to the next
/// shape. The final fallback walks the object's values in insertion order, which
/// relies on `serde_json`'s `preserve_order` feature.
pub fn extract_employee_name(body: &Value) -> Result<CandidateName, NameExtractionError> {
    let fields = body.as_object().ok_or(NameExtractionError::MissingName)?;

    let direct = fields.get("employee_name");
    let nested = fields
        .get("parameters")
        .and_then(|parameters| parameters.get("employee_name"));
    let positional = fields
        .get("args")
        .and_then(Value::as_array)
        .and_then(|args| args.first());

    let known_shapes = [
        (NameSource::EmployeeName, direct),
        (NameSource::Parameters, nested),
        (NameSource::Args, positional),
    ];

    known_shapes
        .into_iter()
        .find_map(|(source, value)| usable_text(value?).map(|text| candidate(text, source)))
        .or_else(|| {
            fields
                .values()
                .find_map(usable_text)
                .map(|text| candidate(text, NameSource::FirstStringValue))
        })
        .ok_or(NameExtractionError::MissingName)
}

fn usable_text(value: &Value) -> Option<&str> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn candidate(text: &str, source: NameSource) -> CandidateName {
    CandidateName {
        value: text.to_string(),
        source,
    }
}
