//! Directory Client - employee directory presentation core
//!
//! Owns the employee/department collections, the filter/search pipeline,
//! and the department-assignment workflow. The presentation layer receives
//! a [`DirectoryViewModel`] and feeds user intents back through
//! [`DirectoryController`].

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod http;
pub mod session;
pub mod source;
pub mod workflow;

pub use config::ClientConfig;
pub use controller::{DirectoryController, DirectoryViewModel, NavigationRequest};
pub use error::{ClientError, ClientResult};
pub use filter::{DepartmentFilter, StatusFilter, visible_employees};
pub use gateway::DirectoryGateway;
pub use http::HttpClient;
pub use session::SessionContext;
pub use source::{AdminSource, DepartmentScopedSource, EmployeeSource, source_for_role};
pub use workflow::{AssignmentNotice, AssignmentState};

// Re-export shared types for convenience
pub use shared::client::SessionUser;
pub use shared::models::{Department, DepartmentRef, Employee, EmployeeStatus, Role};
