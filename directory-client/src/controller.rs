//! Employee directory controller
//!
//! Owns the employee/department collections and orchestrates
//! role-conditional loading, filtering, and the assignment workflow.
//! The presentation layer only ever sees a [`DirectoryViewModel`] and
//! feeds intents back through the methods here.

use std::sync::Arc;

use shared::client::SessionUser;
use shared::models::{Department, DepartmentRef, Employee};

use crate::error::{ClientError, ClientResult};
use crate::filter::{DepartmentFilter, StatusFilter, visible_employees};
use crate::gateway::DirectoryGateway;
use crate::session::SessionContext;
use crate::source::{EmployeeSource, source_for_role};
use crate::workflow::{AssignmentNotice, AssignmentState};

/// Snapshot handed to the presentation layer on every render.
#[derive(Debug, Clone)]
pub struct DirectoryViewModel {
    /// Role-filtered, search-filtered employee list in server order
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub loading: bool,
    pub is_admin: bool,
    pub workflow: AssignmentState,
}

/// Navigation intent delegated to the routing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    EmployeeDetail { employee_id: String },
    AddEmployee,
}

/// Directory state owner.
///
/// All mutation goes through `&mut self`, so the single-logical-thread
/// model needs no locks; the one concurrency guard (no duplicate submit)
/// falls out of the `Submitting` workflow state.
pub struct DirectoryController {
    user: SessionUser,
    gateway: Arc<dyn DirectoryGateway>,
    source: Box<dyn EmployeeSource>,
    employees: Vec<Employee>,
    departments: Vec<Department>,
    loading: bool,
    search_term: String,
    department_filter: DepartmentFilter,
    status_filter: StatusFilter,
    workflow: AssignmentState,
}

impl DirectoryController {
    /// Build a controller for the given operator.
    ///
    /// The loading strategy is bound to the role here, once; nothing else
    /// branches on role during loading.
    pub fn new(user: SessionUser, gateway: Arc<dyn DirectoryGateway>) -> Self {
        let source = source_for_role(user.role, gateway.clone());
        Self {
            user,
            gateway,
            source,
            employees: Vec::new(),
            departments: Vec::new(),
            loading: false,
            search_term: String::new(),
            department_filter: DepartmentFilter::All,
            status_filter: StatusFilter::All,
            workflow: AssignmentState::Closed,
        }
    }

    /// Build a controller from the session context.
    ///
    /// Fails with `Unauthorized` when no operator is logged in.
    pub fn for_session(
        session: &SessionContext,
        gateway: Arc<dyn DirectoryGateway>,
    ) -> ClientResult<Self> {
        let user = session
            .current_user()
            .cloned()
            .ok_or(ClientError::Unauthorized)?;
        Ok(Self::new(user, gateway))
    }

    // ========== Loading ==========

    /// Load departments and employees through the role-bound source.
    ///
    /// A failed fetch is logged and degrades to an empty collection; the
    /// page always renders, possibly empty.
    pub async fn load(&mut self) {
        self.loading = true;

        self.employees = match self.source.load_employees().await {
            Ok(employees) => employees,
            Err(err) => {
                tracing::warn!(error = %err, "employee fetch failed, rendering empty directory");
                Vec::new()
            }
        };

        self.departments = match self.source.load_departments().await {
            Ok(departments) => departments,
            Err(err) => {
                tracing::warn!(error = %err, "department fetch failed, rendering empty list");
                Vec::new()
            }
        };

        self.loading = false;
        tracing::debug!(
            employees = self.employees.len(),
            departments = self.departments.len(),
            "directory loaded"
        );
    }

    /// Replace one employee's snapshot with a copy carrying the new
    /// department. Every other entry is left structurally untouched so
    /// identity-based change detection stays correct.
    pub fn apply_assignment_result(
        &mut self,
        employee_id: &str,
        department: Option<DepartmentRef>,
    ) {
        self.employees = self
            .employees
            .iter()
            .map(|employee| {
                if employee.id == employee_id {
                    employee.with_department(department.clone())
                } else {
                    employee.clone()
                }
            })
            .collect();
    }

    // ========== Filter intents ==========

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_department_filter(&mut self, raw: &str) {
        self.department_filter = DepartmentFilter::parse(raw);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.status_filter = StatusFilter::parse(raw);
    }

    /// "Clear Filters": empty search, both selectors back to "all".
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.department_filter = DepartmentFilter::All;
        self.status_filter = StatusFilter::All;
    }

    // ========== Assignment workflow intents ==========

    /// Open the assignment modal for an employee. Admin-only; a no-op
    /// when the workflow is already open or the employee is unknown.
    pub fn open_assignment_for(&mut self, employee_id: &str) {
        if !self.user.role.is_admin() || !self.workflow.is_closed() {
            return;
        }
        if let Some(employee) = self.employees.iter().find(|e| e.id == employee_id) {
            self.workflow = AssignmentState::open_for(employee);
        }
    }

    pub fn select_department(&mut self, department_id: impl Into<String>) {
        self.workflow.select_department(department_id);
    }

    pub fn cancel_assignment(&mut self) {
        self.workflow.cancel();
    }

    /// Submit the pending assignment.
    ///
    /// No-op unless the workflow is `Open` with a selection. The local
    /// collection is only patched after the server confirms success; on
    /// failure the modal reopens with the selection intact and the
    /// collection is untouched.
    pub async fn confirm_assignment(&mut self) -> Option<AssignmentNotice> {
        let (employee, department_id) = self.workflow.begin_submit()?;

        let response = self
            .gateway
            .assign_employee_department(&employee.id, &department_id)
            .await;

        let notice = match response {
            Ok(response) => match response.confirmed_department() {
                Some(department) => {
                    self.apply_assignment_result(&employee.id, Some(department.clone()));
                    self.workflow.finish_success();
                    tracing::debug!(
                        employee_id = %employee.id,
                        department_id = %department.id,
                        "department assigned"
                    );
                    AssignmentNotice::Success {
                        employee_id: employee.id,
                        department,
                    }
                }
                None => {
                    self.workflow.finish_failure();
                    AssignmentNotice::Failure {
                        employee_id: employee.id,
                        reason: "server did not confirm the assignment".to_string(),
                    }
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, employee_id = %employee.id, "assignment request failed");
                self.workflow.finish_failure();
                AssignmentNotice::Failure {
                    employee_id: employee.id,
                    reason: err.to_string(),
                }
            }
        };

        Some(notice)
    }

    // ========== Navigation intents ==========

    /// Row click: delegated to the routing collaborator.
    pub fn select_employee(&self, employee_id: &str) -> NavigationRequest {
        NavigationRequest::EmployeeDetail {
            employee_id: employee_id.to_string(),
        }
    }

    pub fn add_employee(&self) -> NavigationRequest {
        NavigationRequest::AddEmployee
    }

    // ========== View model ==========

    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Full employee collection, before filtering.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn workflow(&self) -> &AssignmentState {
        &self.workflow
    }

    /// Derive the snapshot handed to the presentation layer.
    pub fn view_model(&self) -> DirectoryViewModel {
        DirectoryViewModel {
            employees: visible_employees(
                &self.employees,
                self.user.role,
                &self.search_term,
                &self.department_filter,
                &self.status_filter,
            ),
            departments: self.departments.clone(),
            loading: self.loading,
            is_admin: self.is_admin(),
            workflow: self.workflow.clone(),
        }
    }
}
