//! Role-bound employee sources
//!
//! One loading strategy per role, behind a single interface. The
//! controller picks its source once at construction and never branches
//! on role while loading.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Department, Employee, Role};

use crate::error::ClientResult;
use crate::gateway::DirectoryGateway;

/// Loader interface the controller depends on.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn load_employees(&self) -> ClientResult<Vec<Employee>>;
    async fn load_departments(&self) -> ClientResult<Vec<Department>>;
}

/// Admin loading strategy: organization-wide endpoints.
pub struct AdminSource {
    gateway: Arc<dyn DirectoryGateway>,
}

impl AdminSource {
    pub fn new(gateway: Arc<dyn DirectoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EmployeeSource for AdminSource {
    async fn load_employees(&self) -> ClientResult<Vec<Employee>> {
        Ok(self.gateway.fetch_all_employees().await?.data)
    }

    async fn load_departments(&self) -> ClientResult<Vec<Department>> {
        Ok(self.gateway.fetch_departments().await?.departments())
    }
}

/// Non-admin loading strategy: server-scoped employee list, department
/// derived from the caller's own profile (zero or one entry). The
/// organization-wide department endpoint is never touched.
pub struct DepartmentScopedSource {
    gateway: Arc<dyn DirectoryGateway>,
}

impl DepartmentScopedSource {
    pub fn new(gateway: Arc<dyn DirectoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EmployeeSource for DepartmentScopedSource {
    async fn load_employees(&self) -> ClientResult<Vec<Employee>> {
        Ok(self
            .gateway
            .fetch_department_scoped_employees()
            .await?
            .employees)
    }

    async fn load_departments(&self) -> ClientResult<Vec<Department>> {
        let profile = self.gateway.fetch_own_profile().await?;
        Ok(profile
            .department()
            .map(Department::from_ref)
            .into_iter()
            .collect())
    }
}

/// Select the loading strategy for a role, once per session.
pub fn source_for_role(role: Role, gateway: Arc<dyn DirectoryGateway>) -> Box<dyn EmployeeSource> {
    match role {
        Role::Admin => Box::new(AdminSource::new(gateway)),
        Role::DepartmentHead | Role::Other => Box::new(DepartmentScopedSource::new(gateway)),
    }
}
