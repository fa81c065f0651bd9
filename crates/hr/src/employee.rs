use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use minierp_core::{DomainError, DomainResult, EmployeeId, Entity};

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmployeeStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl core::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "Active"),
            EmployeeStatus::OnLeave => write!(f, "On Leave"),
            EmployeeStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub position: String,
    /// Monthly salary in whole currency units.
    pub salary: u64,
    /// Days attended.
    pub attendance: u32,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
}

impl Employee {
    /// Build a fresh record from a draft: attendance 0, status Active,
    /// joined `today`.
    pub fn hire(id: EmployeeId, draft: NewEmployee, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            position: draft.position,
            salary: draft.salary,
            attendance: 0,
            status: EmployeeStatus::Active,
            join_date: today,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Merge every field present in `patch`.
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            name,
            email,
            position,
            salary,
            attendance,
            status,
            join_date,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = position {
            self.position = v;
        }
        if let Some(v) = salary {
            self.salary = v;
        }
        if let Some(v) = attendance {
            self.attendance = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = join_date {
            self.join_date = v;
        }
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
    pub salary: u64,
}

impl NewEmployee {
    /// Form-level checks: every text field is required.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.position.trim().is_empty()
        {
            return Err(DomainError::validation("please fill all employee fields"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        Ok(())
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<u64>,
    pub attendance: Option<u32>,
    pub status: Option<EmployeeStatus>,
    pub join_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn draft() -> NewEmployee {
        NewEmployee {
            name: "Neha Verma".to_string(),
            email: "neha@company.com".to_string(),
            position: "Analyst".to_string(),
            salary: 40000,
        }
    }

    #[test]
    fn hire_applies_defaults() {
        let emp = Employee::hire(EmployeeId::new(), draft(), today());
        assert_eq!(emp.attendance, 0);
        assert_eq!(emp.status, EmployeeStatus::Active);
        assert_eq!(emp.join_date, today());
        assert!(emp.is_active());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut emp = Employee::hire(EmployeeId::new(), draft(), today());
        emp.apply(EmployeePatch {
            status: Some(EmployeeStatus::OnLeave),
            attendance: Some(12),
            ..Default::default()
        });

        assert_eq!(emp.status, EmployeeStatus::OnLeave);
        assert_eq!(emp.attendance, 12);
        assert_eq!(emp.name, "Neha Verma");
        assert_eq!(emp.salary, 40000);
        assert!(!emp.is_active());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let mut d = draft();
        d.position = "  ".to_string();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn validate_rejects_email_without_at() {
        let mut d = draft();
        d.email = "neha.company.com".to_string();
        assert!(d.validate().is_err());
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&EmployeeStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
        assert_eq!(EmployeeStatus::OnLeave.to_string(), "On Leave");
    }

    #[test]
    fn patch_uses_the_same_keys_as_employee() {
        let patch = EmployeePatch {
            join_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["joinDate"], "2024-03-01");
        assert!(json.get("join_date").is_none());

        let parsed: EmployeePatch =
            serde_json::from_str(r#"{"joinDate":"2024-03-01","status":"On Leave"}"#).unwrap();
        assert_eq!(parsed.join_date, patch.join_date);
        assert_eq!(parsed.status, Some(EmployeeStatus::OnLeave));
    }
}
