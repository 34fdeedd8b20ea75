//! Department assignment workflow
//!
//! Single-modal state machine scoped to one employee at a time:
//! `Closed` → `Open` → `Submitting` → `Closed` on success, back to `Open`
//! on failure so the operator can retry without re-selecting.

use shared::models::{DepartmentRef, Employee};

/// Assignment workflow state
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentState {
    Closed,
    Open {
        employee: Employee,
        /// Selected department id; `None` until the operator picks one
        selected: Option<String>,
    },
    Submitting {
        employee: Employee,
        selected: String,
    },
}

impl AssignmentState {
    /// Open the modal for an employee, pre-selecting their current
    /// department if any.
    pub fn open_for(employee: &Employee) -> Self {
        AssignmentState::Open {
            selected: employee.department.as_ref().map(|dept| dept.id.clone()),
            employee: employee.clone(),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, AssignmentState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, AssignmentState::Submitting { .. })
    }

    /// Update the selection. Valid only while `Open`; an empty id clears
    /// the selection (the selector's placeholder option).
    pub fn select_department(&mut self, department_id: impl Into<String>) {
        if let AssignmentState::Open { selected, .. } = self {
            let id = department_id.into();
            *selected = if id.is_empty() { None } else { Some(id) };
        }
    }

    /// Close the modal, discarding the selection. Disabled while a
    /// submission is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, AssignmentState::Open { .. }) {
            *self = AssignmentState::Closed;
        }
    }

    /// Transition `Open` with a non-empty selection into `Submitting`,
    /// handing back what to submit. Returns `None` (and stays put) in any
    /// other state, which makes `confirm` a no-op there.
    pub fn begin_submit(&mut self) -> Option<(Employee, String)> {
        let submission = match &*self {
            AssignmentState::Open {
                employee,
                selected: Some(department_id),
            } => (employee.clone(), department_id.clone()),
            _ => return None,
        };
        *self = AssignmentState::Submitting {
            employee: submission.0.clone(),
            selected: submission.1.clone(),
        };
        Some(submission)
    }

    /// Server confirmed the assignment: close the modal.
    pub fn finish_success(&mut self) {
        if self.is_submitting() {
            *self = AssignmentState::Closed;
        }
    }

    /// Submission failed: reopen with the selection intact for a retry.
    pub fn finish_failure(&mut self) {
        if let AssignmentState::Submitting { employee, selected } = &*self {
            let reopened = AssignmentState::Open {
                employee: employee.clone(),
                selected: Some(selected.clone()),
            };
            *self = reopened;
        }
    }
}

/// Outcome notification for the presentation layer's toast/alert surface.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentNotice {
    Success {
        employee_id: String,
        department: DepartmentRef,
    },
    Failure {
        employee_id: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(department: &str) -> Employee {
        serde_json::from_str(&format!(
            r#"{{
                "id": "e1",
                "firstName": "Ada",
                "personalEmail": "ada@example.com",
                "employeeId": "EMP001",
                "position": "Engineer",
                "status": "active",
                "department": {department}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_open_preselects_current_department() {
        let state = AssignmentState::open_for(&employee(r#"{"id": "d9", "name": "Ops"}"#));
        assert!(matches!(
            state,
            AssignmentState::Open { selected: Some(ref id), .. } if id == "d9"
        ));
    }

    #[test]
    fn test_open_for_unassigned_starts_with_empty_selection() {
        let state = AssignmentState::open_for(&employee("null"));
        assert!(matches!(state, AssignmentState::Open { selected: None, .. }));
    }

    #[test]
    fn test_selecting_placeholder_clears_selection() {
        let mut state = AssignmentState::open_for(&employee(r#"{"id": "d9", "name": "Ops"}"#));
        state.select_department("");
        assert!(matches!(state, AssignmentState::Open { selected: None, .. }));
    }

    #[test]
    fn test_begin_submit_requires_open_with_selection() {
        let mut closed = AssignmentState::Closed;
        assert!(closed.begin_submit().is_none());
        assert!(closed.is_closed());

        let mut no_selection = AssignmentState::open_for(&employee("null"));
        assert!(no_selection.begin_submit().is_none());
        assert!(matches!(no_selection, AssignmentState::Open { .. }));

        let mut ready = AssignmentState::open_for(&employee("null"));
        ready.select_department("d1");
        let (submitted, department_id) = ready.begin_submit().unwrap();
        assert_eq!(submitted.id, "e1");
        assert_eq!(department_id, "d1");
        assert!(ready.is_submitting());
    }

    #[test]
    fn test_cancel_disabled_while_submitting() {
        let mut state = AssignmentState::open_for(&employee("null"));
        state.select_department("d1");
        state.begin_submit().unwrap();

        state.cancel();
        assert!(state.is_submitting());

        state.finish_failure();
        assert!(matches!(
            state,
            AssignmentState::Open { selected: Some(ref id), .. } if id == "d1"
        ));

        state.cancel();
        assert!(state.is_closed());
    }

    #[test]
    fn test_success_closes_the_modal() {
        let mut state = AssignmentState::open_for(&employee("null"));
        state.select_department("d1");
        state.begin_submit().unwrap();
        state.finish_success();
        assert!(state.is_closed());
    }
}
