//! Filter/search engine
//!
//! Pure predicate pipeline over the employee collection. Stateless:
//! the visible list is recomputed from its inputs on every call and the
//! original collection order is preserved.

use shared::models::{Employee, Role};

/// Department filter criterion, parsed once from the UI selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    /// "all" — every employee passes
    #[default]
    All,
    /// "none" — only employees without a department
    Unassigned,
    /// A department name, matched case-insensitively
    Named(String),
}

impl DepartmentFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "all" => DepartmentFilter::All,
            "none" => DepartmentFilter::Unassigned,
            name => DepartmentFilter::Named(name.to_string()),
        }
    }
}

/// Status filter criterion.
///
/// UI labels map onto stored values by lower-casing and replacing spaces
/// with underscores, so "On Leave" selects `on_leave`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Is(String),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            StatusFilter::All
        } else {
            StatusFilter::Is(raw.to_lowercase().replace(' ', "_"))
        }
    }
}

/// Derive the displayed employee list.
///
/// Logical AND of the search, department, and status predicates. The
/// department predicate only applies to Admins: for every other role the
/// server already scoped the collection, and filtering again client-side
/// would double-filter.
pub fn visible_employees(
    employees: &[Employee],
    role: Role,
    search_term: &str,
    department_filter: &DepartmentFilter,
    status_filter: &StatusFilter,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| {
            matches_search(employee, search_term)
                && matches_department(employee, role, department_filter)
                && matches_status(employee, status_filter)
        })
        .cloned()
        .collect()
}

fn matches_search(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [
        employee.first_name.as_str(),
        employee.personal_email.as_str(),
        employee.employee_id.as_str(),
        employee.position.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_department(employee: &Employee, role: Role, filter: &DepartmentFilter) -> bool {
    if !role.is_admin() {
        return true;
    }
    match filter {
        DepartmentFilter::All => true,
        DepartmentFilter::Unassigned => employee.is_unassigned(),
        DepartmentFilter::Named(name) => employee
            .department
            .as_ref()
            .is_some_and(|dept| dept.name.to_lowercase() == name.to_lowercase()),
    }
}

fn matches_status(employee: &Employee, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Is(value) => employee.status.as_str() == value,
    }
}
