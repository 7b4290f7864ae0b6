use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
    OnLeave,
}

impl FromSql<Text, Pg> for EmployeeStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "ACTIVE" => Ok(EmployeeStatus::Active),
            "INACTIVE" => Ok(EmployeeStatus::Inactive),
            "TERMINATED" => Ok(EmployeeStatus::Terminated),
            "ON_LEAVE" => Ok(EmployeeStatus::OnLeave),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for EmployeeStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            EmployeeStatus::Active => out.write_all(b"ACTIVE")?,
            EmployeeStatus::Inactive => out.write_all(b"INACTIVE")?,
            EmployeeStatus::Terminated => out.write_all(b"TERMINATED")?,
            EmployeeStatus::OnLeave => out.write_all(b"ON_LEAVE")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl FromSql<Text, Pg> for EmployeeRole {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "ADMIN" => Ok(EmployeeRole::Admin),
            "HR" => Ok(EmployeeRole::Hr),
            "MANAGER" => Ok(EmployeeRole::Manager),
            "EMPLOYEE" => Ok(EmployeeRole::Employee),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for EmployeeRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            EmployeeRole::Admin => out.write_all(b"ADMIN")?,
            EmployeeRole::Hr => out.write_all(b"HR")?,
            EmployeeRole::Manager => out.write_all(b"MANAGER")?,
            EmployeeRole::Employee => out.write_all(b"EMPLOYEE")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Annual,
    Sick,
    Maternity,
    Paternity,
    Emergency,
    Personal,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "ANNUAL",
            LeaveType::Sick => "SICK",
            LeaveType::Maternity => "MATERNITY",
            LeaveType::Paternity => "PATERNITY",
            LeaveType::Emergency => "EMERGENCY",
            LeaveType::Personal => "PERSONAL",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromSql<Text, Pg> for LeaveType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "ANNUAL" => Ok(LeaveType::Annual),
            "SICK" => Ok(LeaveType::Sick),
            "MATERNITY" => Ok(LeaveType::Maternity),
            "PATERNITY" => Ok(LeaveType::Paternity),
            "EMERGENCY" => Ok(LeaveType::Emergency),
            "PERSONAL" => Ok(LeaveType::Personal),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for LeaveType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            LeaveType::Annual => out.write_all(b"ANNUAL")?,
            LeaveType::Sick => out.write_all(b"SICK")?,
            LeaveType::Maternity => out.write_all(b"MATERNITY")?,
            LeaveType::Paternity => out.write_all(b"PATERNITY")?,
            LeaveType::Emergency => out.write_all(b"EMERGENCY")?,
            LeaveType::Personal => out.write_all(b"PERSONAL")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromSql<Text, Pg> for LeaveStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "PENDING" => Ok(LeaveStatus::Pending),
            "APPROVED" => Ok(LeaveStatus::Approved),
            "REJECTED" => Ok(LeaveStatus::Rejected),
            "CANCELLED" => Ok(LeaveStatus::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for LeaveStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            LeaveStatus::Pending => out.write_all(b"PENDING")?,
            LeaveStatus::Approved => out.write_all(b"APPROVED")?,
            LeaveStatus::Rejected => out.write_all(b"REJECTED")?,
            LeaveStatus::Cancelled => out.write_all(b"CANCELLED")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Draft,
    Submitted,
    Finalized,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Draft => "DRAFT",
            ReviewStatus::Submitted => "SUBMITTED",
            ReviewStatus::Finalized => "FINALIZED",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromSql<Text, Pg> for ReviewStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "DRAFT" => Ok(ReviewStatus::Draft),
            "SUBMITTED" => Ok(ReviewStatus::Submitted),
            "FINALIZED" => Ok(ReviewStatus::Finalized),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ReviewStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ReviewStatus::Draft => out.write_all(b"DRAFT")?,
            ReviewStatus::Submitted => out.write_all(b"SUBMITTED")?,
            ReviewStatus::Finalized => out.write_all(b"FINALIZED")?,
        }
        Ok(IsNull::No)
    }
}
