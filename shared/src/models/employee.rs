//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::department::{DepartmentRef, deserialize_opt_ref};

/// Employment status
///
/// Unknown wire values fall back to `Unknown` rather than failing the
/// whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    #[serde(other)]
    Unknown,
}

impl EmployeeStatus {
    /// Stored wire value, used by the status filter comparison.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::OnLeave => "on_leave",
            EmployeeStatus::Unknown => "unknown",
        }
    }
}

/// Employee record as served by the directory API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(alias = "_id")]
    pub id: String,
    /// Searchable fields default to empty when the record omits them, so
    /// one degenerate employee never fails the whole list payload.
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub personal_email: String,
    /// Human-facing employee code (displayed and searchable)
    #[serde(default)]
    pub employee_id: String,
    /// Free-text role title
    #[serde(default)]
    pub position: String,
    pub status: EmployeeStatus,
    #[serde(default)]
    pub joining_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    /// `None` means unassigned; every degenerate wire form is normalized
    /// here so the rest of the codebase never sees an empty-object ref.
    #[serde(default, deserialize_with = "deserialize_opt_ref")]
    pub department: Option<DepartmentRef>,
}

impl Employee {
    /// Whether the employee has no department assigned.
    pub fn is_unassigned(&self) -> bool {
        self.department.is_none()
    }

    /// New snapshot with the department replaced.
    ///
    /// Assignment produces a fresh record rather than mutating in place,
    /// keeping identity-based change detection in the presentation layer
    /// correct.
    pub fn with_department(&self, department: Option<DepartmentRef>) -> Self {
        Self {
            department,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_json(department: &str) -> String {
        format!(
            r#"{{
                "_id": "e1",
                "firstName": "Ada",
                "personalEmail": "ada@example.com",
                "employeeId": "EMP001",
                "position": "Engineer",
                "status": "active",
                "department": {department}
            }}"#
        )
    }

    #[test]
    fn test_deserialize_camel_case_wire_format() {
        let employee: Employee =
            serde_json::from_str(&employee_json(r#"{"id": "d1", "name": "Engineering"}"#)).unwrap();
        assert_eq!(employee.id, "e1");
        assert_eq!(employee.first_name, "Ada");
        assert_eq!(employee.employee_id, "EMP001");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert!(employee.last_name.is_none());
        assert!(employee.joining_date.is_none());
        assert!(!employee.is_unassigned());
    }

    #[test]
    fn test_exactly_one_of_unassigned_or_reference_holds() {
        let assigned: Employee =
            serde_json::from_str(&employee_json(r#"{"id": "d1", "name": "Engineering"}"#)).unwrap();
        let empty_object: Employee = serde_json::from_str(&employee_json("{}")).unwrap();
        let null_field: Employee = serde_json::from_str(&employee_json("null")).unwrap();

        assert!(!assigned.is_unassigned());
        assert!(assigned.department.is_some());

        for employee in [empty_object, null_field] {
            assert!(employee.is_unassigned());
            assert!(employee.department.is_none());
        }
    }

    #[test]
    fn test_missing_searchable_fields_default_to_empty() {
        let employee: Employee = serde_json::from_str(r#"{"id": "e9", "status": "active"}"#).unwrap();
        assert_eq!(employee.first_name, "");
        assert_eq!(employee.personal_email, "");
        assert_eq!(employee.employee_id, "");
        assert_eq!(employee.position, "");
        assert!(employee.is_unassigned());
    }

    #[test]
    fn test_unknown_status_does_not_fail_payload() {
        let json = employee_json("null").replace("active", "sabbatical");
        let employee: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee.status, EmployeeStatus::Unknown);
    }

    #[test]
    fn test_with_department_replaces_only_department() {
        let original: Employee = serde_json::from_str(&employee_json("null")).unwrap();
        let assigned = original.with_department(Some(DepartmentRef {
            id: "d1".to_string(),
            name: "Sales".to_string(),
        }));

        assert_eq!(assigned.id, original.id);
        assert_eq!(assigned.first_name, original.first_name);
        assert_eq!(assigned.department.as_ref().unwrap().name, "Sales");
        assert!(original.is_unassigned());
    }

    #[test]
    fn test_status_as_str_matches_wire_values() {
        assert_eq!(EmployeeStatus::OnLeave.as_str(), "on_leave");
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            r#""on_leave""#
        );
    }
}
