use super::domain::EmployeeRecord;

/// Terminal outcome of resolving a candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Found(EmployeeRecord),
    /// Carries the name as queried so it can be echoed back to the caller.
    NotFound(String),
}

/// First record, in directory order, whose name contains the query or is contained by it.
///
/// Comparison is case-insensitive. Voice transcripts produce both partial input
/// ("sarah") and padded input ("I'd like Sarah Johnson please"); both resolve as
/// long as one side appears verbatim in the other. A blank query never matches.
pub fn find_employee<'a>(records: &'a [EmployeeRecord], name: &str) -> Option<&'a EmployeeRecord> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    records.iter().find(|record| {
        let candidate = record.name.to_lowercase();
        candidate.contains(&query) || query.contains(&candidate)
    })
}
