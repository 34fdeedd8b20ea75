//! Client-related types shared between server and client
//!
//! Wire payloads for the directory API endpoints. Each endpoint has its
//! own envelope shape (the backend is not uniform here), so every field
//! defaults to empty rather than failing the page on a missing payload.

use serde::{Deserialize, Serialize};

use crate::models::{Department, DepartmentRef, Employee, Role, deserialize_opt_ref};

// =============================================================================
// Identity context
// =============================================================================

/// Current operator, as established at login by the identity collaborator.
///
/// The `department` snapshot is display-only for Department Heads; the
/// freshly fetched profile is authoritative when they disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_opt_ref")]
    pub department: Option<DepartmentRef>,
}

// =============================================================================
// Directory API payloads
// =============================================================================

/// `GET /api/employees` (Admin only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub data: Vec<Employee>,
}

/// `GET /api/employees/department` (non-Admin; server enforces the scope)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopedEmployeeListResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// `GET /api/departments` (Admin only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentListResponse {
    #[serde(default)]
    pub data: Option<DepartmentListData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentListData {
    #[serde(default, rename = "departmentDetails")]
    pub department_details: Vec<Department>,
}

impl DepartmentListResponse {
    /// Department list, defaulting to empty when the payload is absent.
    pub fn departments(self) -> Vec<Department> {
        self.data.map(|d| d.department_details).unwrap_or_default()
    }
}

/// `GET /api/users/profile` (non-Admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub data: Option<ProfileData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default, deserialize_with = "deserialize_opt_ref")]
    pub department: Option<DepartmentRef>,
}

impl ProfileResponse {
    /// Department reference from the profile, if any.
    pub fn department(self) -> Option<DepartmentRef> {
        self.data.and_then(|d| d.department)
    }
}

/// `PUT /api/employees/{id}/department`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDepartmentRequest {
    pub department_id: String,
}

/// Response to a department assignment.
///
/// An absent `success` flag counts as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignDepartmentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AssignDepartmentData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignDepartmentData {
    #[serde(default, deserialize_with = "deserialize_opt_ref")]
    pub department: Option<DepartmentRef>,
}

impl AssignDepartmentResponse {
    /// Server-confirmed department snapshot, present only on success.
    pub fn confirmed_department(self) -> Option<DepartmentRef> {
        if !self.success {
            return None;
        }
        self.data.and_then(|d| d.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_fields_default_to_empty() {
        let employees: EmployeeListResponse = serde_json::from_str("{}").unwrap();
        assert!(employees.data.is_empty());

        let scoped: ScopedEmployeeListResponse = serde_json::from_str("{}").unwrap();
        assert!(scoped.employees.is_empty());

        let departments: DepartmentListResponse = serde_json::from_str("{}").unwrap();
        assert!(departments.departments().is_empty());

        let profile: ProfileResponse = serde_json::from_str("{}").unwrap();
        assert!(profile.department().is_none());
    }

    #[test]
    fn test_department_list_payload() {
        let response: DepartmentListResponse = serde_json::from_str(
            r#"{"data": {"departmentDetails": [{"_id": "d1", "name": "Sales", "code": "SLS"}]}}"#,
        )
        .unwrap();
        let departments = response.departments();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].code.as_deref(), Some("SLS"));
    }

    #[test]
    fn test_assignment_response_without_success_flag_is_failure() {
        let response: AssignDepartmentResponse =
            serde_json::from_str(r#"{"data": {"department": {"id": "d1", "name": "Sales"}}}"#)
                .unwrap();
        assert!(!response.success);
        assert!(response.confirmed_department().is_none());
    }

    #[test]
    fn test_assignment_response_success_carries_snapshot() {
        let response: AssignDepartmentResponse = serde_json::from_str(
            r#"{"success": true, "data": {"department": {"id": "d1", "name": "Sales"}}}"#,
        )
        .unwrap();
        let dept = response.confirmed_department().unwrap();
        assert_eq!(dept.id, "d1");
        assert_eq!(dept.name, "Sales");
    }

    #[test]
    fn test_session_user_tolerates_degenerate_department() {
        let user: SessionUser =
            serde_json::from_str(r#"{"_id": "u1", "role": "Department Head", "department": {}}"#)
                .unwrap();
        assert_eq!(user.role, Role::DepartmentHead);
        assert!(user.department.is_none());
    }
}
