use chrono::NaiveDate;

use crate::models::salary::Salary;

/// A persisted employee row. `department_id` always points at an existing
/// department; the foreign key cascades on department deletion.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department_id: i64,
    #[sqlx(rename = "salary_cents")]
    pub salary: Salary,
    pub birthdate: Option<NaiveDate>,
    pub cv: Option<String>,
}

/// Field values for an employee that does not have an id yet.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department_id: i64,
    pub salary: Salary,
    pub birthdate: Option<NaiveDate>,
}
