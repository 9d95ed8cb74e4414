use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::matcher::{find_employee, MatchOutcome};

/// Identifier wrapper for directory entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

/// Directory entry returned to the voice platform when a caller asks for someone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub location: String,
    pub extension: String,
    pub available: bool,
}

impl EmployeeRecord {
    fn seed(
        id: &str,
        name: &str,
        department: &str,
        location: &str,
        extension: &str,
        available: bool,
    ) -> Self {
        Self {
            id: EmployeeId(id.to_string()),
            name: name.to_string(),
            department: department.to_string(),
            location: location.to_string(),
            extension: extension.to_string(),
            available,
        }
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

/// Ordered, immutable set of employees. Cloning shares the underlying records.
#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    records: Arc<[EmployeeRecord]>,
}

impl EmployeeDirectory {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The headquarters directory the receptionist bot ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            EmployeeRecord::seed(
                "E001",
                "Sarah Johnson",
                "Sales",
                "Floor 2, Room 201",
                "2201",
                true,
            ),
            EmployeeRecord::seed(
                "E002",
                "Robert Wilson",
                "Engineering",
                "Floor 3, Room 315",
                "3315",
                false,
            ),
            EmployeeRecord::seed("E003", "Lisa Chen", "HR", "Floor 1, Room 105", "1105", true),
            EmployeeRecord::seed(
                "E004",
                "David Martinez",
                "Marketing",
                "Floor 2, Room 225",
                "2225",
                true,
            ),
            EmployeeRecord::seed(
                "E005",
                "Jennifer Taylor",
                "Finance",
                "Floor 1, Room 120",
                "1120",
                false,
            ),
        ])
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a candidate name against the directory.
    pub fn resolve(&self, name: &str) -> MatchOutcome {
        match find_employee(&self.records, name) {
            Some(record) => MatchOutcome::Found(record.clone()),
            None => MatchOutcome::NotFound(name.to_string()),
        }
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}
