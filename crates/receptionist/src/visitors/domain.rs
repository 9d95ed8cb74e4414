use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const VISITOR_INSTRUCTIONS: &str = "Please verify ID and provide visitor badge.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorInfo {
    pub id: String,
    pub name: String,
    pub company: String,
    pub purpose: String,
    pub expected_arrival: DateTime<Utc>,
    pub contact_number: String,
}

fn visitor(
    id: &str,
    name: &str,
    company: &str,
    purpose: &str,
    expected_arrival: &str,
    contact_number: &str,
) -> Option<VisitorInfo> {
    let expected_arrival = DateTime::parse_from_rfc3339(expected_arrival)
        .ok()?
        .with_timezone(&Utc);
    Some(VisitorInfo {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        purpose: purpose.to_string(),
        expected_arrival,
        contact_number: contact_number.to_string(),
    })
}

/// Visitors the demo front desk is expecting.
pub fn sample_visitors() -> Vec<VisitorInfo> {
    [
        visitor(
            "V001",
            "John Smith",
            "ABC Technologies",
            "Meeting with Sarah Johnson",
            "2025-09-18T10:00:00Z",
            "+1-555-0123",
        ),
        visitor(
            "V002",
            "Emily Davis",
            "XYZ Corp",
            "Product demonstration",
            "2025-09-18T14:30:00Z",
            "+1-555-0456",
        ),
        visitor(
            "V003",
            "Michael Brown",
            "Tech Solutions Inc",
            "Interview with HR",
            "2025-09-18T11:15:00Z",
            "+1-555-0789",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdditionalContext {
    pub expected_arrival: DateTime<Utc>,
    pub contact_number: String,
    pub special_instructions: &'static str,
}

/// Context handed to the bot before it answers a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreCallContext {
    pub visitor_info: VisitorInfo,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub additional_context: AdditionalContext,
}

impl PreCallContext {
    pub fn for_visitor(visitor: VisitorInfo, now: DateTime<Utc>) -> Self {
        let message = format!(
            "Expecting visitor: {} from {}. Purpose: {}",
            visitor.name, visitor.company, visitor.purpose
        );
        let additional_context = AdditionalContext {
            expected_arrival: visitor.expected_arrival,
            contact_number: visitor.contact_number.clone(),
            special_instructions: VISITOR_INSTRUCTIONS,
        };
        Self {
            visitor_info: visitor,
            timestamp: now,
            message,
            additional_context,
        }
    }

    /// Pick one of `visitors` at random; `None` when the list is empty.
    pub fn pick<R: Rng + ?Sized>(
        visitors: &[VisitorInfo],
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<Self> {
        visitors
            .choose(rng)
            .cloned()
            .map(|visitor| Self::for_visitor(visitor, now))
    }
}
