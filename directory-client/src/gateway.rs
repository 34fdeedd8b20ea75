//! Directory data gateway contract
//!
//! Role-aware API surface consumed by the controller. The network
//! implementation lives in [`crate::http`]; tests substitute their own.

use async_trait::async_trait;
use shared::client::{
    AssignDepartmentResponse, DepartmentListResponse, EmployeeListResponse, ProfileResponse,
    ScopedEmployeeListResponse,
};

use crate::error::ClientResult;

/// Backend surface for the employee directory.
///
/// Endpoint scoping is the server's responsibility: the admin endpoints
/// return organization-wide data, the scoped endpoints return only what
/// the caller is allowed to see. The client never re-derives scope.
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    /// Organization-wide employee list (Admin only)
    async fn fetch_all_employees(&self) -> ClientResult<EmployeeListResponse>;

    /// Employees of the caller's own department (non-Admin)
    async fn fetch_department_scoped_employees(&self) -> ClientResult<ScopedEmployeeListResponse>;

    /// Organization-wide department list (Admin only)
    async fn fetch_departments(&self) -> ClientResult<DepartmentListResponse>;

    /// Caller's own profile, including their department reference (non-Admin)
    async fn fetch_own_profile(&self) -> ClientResult<ProfileResponse>;

    /// Assign an employee to a department
    async fn assign_employee_department(
        &self,
        employee_id: &str,
        department_id: &str,
    ) -> ClientResult<AssignDepartmentResponse>;
}
