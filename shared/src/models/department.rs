//! Department Model

use serde::{Deserialize, Deserializer, Serialize};

/// Department entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Human-facing department code (e.g. "ENG"). Absent when the
    /// department was derived from a profile reference.
    #[serde(default)]
    pub code: Option<String>,
}

impl Department {
    /// Build a department entry from an embedded reference.
    ///
    /// Used for Department Heads, whose department list is derived from
    /// their own profile rather than the organization-wide endpoint.
    pub fn from_ref(reference: DepartmentRef) -> Self {
        Self {
            id: reference.id,
            name: reference.name,
            code: None,
        }
    }
}

/// Department reference embedded in an employee record.
///
/// The backend emits this in several degenerate forms for an unassigned
/// employee: the field may be missing, `null`, or a bare `{}`. All of them
/// normalize to `None` at deserialization time via [`deserialize_opt_ref`],
/// so downstream logic only ever tests present vs absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl DepartmentRef {
    /// Normalize a raw JSON value into a reference.
    ///
    /// Returns `None` for `null`, non-objects, and objects without an
    /// `id`/`_id` (which covers the empty-object placeholder).
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = obj
            .get("id")
            .or_else(|| obj.get("_id"))
            .and_then(|v| v.as_str())?;
        let name = obj
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
        })
    }
}

/// Deserialize an optional department reference, collapsing every
/// "no department" representation to `None`.
pub fn deserialize_opt_ref<'de, D>(deserializer: D) -> Result<Option<DepartmentRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(DepartmentRef::from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_opt_ref")]
        department: Option<DepartmentRef>,
    }

    #[test]
    fn test_populated_reference() {
        let holder: Holder =
            serde_json::from_str(r#"{"department": {"id": "d1", "name": "Sales"}}"#).unwrap();
        let dept = holder.department.unwrap();
        assert_eq!(dept.id, "d1");
        assert_eq!(dept.name, "Sales");
    }

    #[test]
    fn test_mongo_style_id_alias() {
        let holder: Holder =
            serde_json::from_str(r#"{"department": {"_id": "d2", "name": "HR"}}"#).unwrap();
        assert_eq!(holder.department.unwrap().id, "d2");
    }

    #[test]
    fn test_missing_field_is_none() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.department.is_none());
    }

    #[test]
    fn test_null_is_none() {
        let holder: Holder = serde_json::from_str(r#"{"department": null}"#).unwrap();
        assert!(holder.department.is_none());
    }

    #[test]
    fn test_empty_object_is_none() {
        let holder: Holder = serde_json::from_str(r#"{"department": {}}"#).unwrap();
        assert!(holder.department.is_none());
    }

    #[test]
    fn test_department_from_ref_has_no_code() {
        let dept = Department::from_ref(DepartmentRef {
            id: "d1".to_string(),
            name: "Sales".to_string(),
        });
        assert_eq!(dept.id, "d1");
        assert!(dept.code.is_none());
    }
}
