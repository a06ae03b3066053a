use sqlx::SqlitePool;

use crate::models::employee::{Employee, NewEmployee};

const COLUMNS: &str = "id, first_name, last_name, department_id, salary_cents, birthdate, cv";

pub async fn insert(pool: &SqlitePool, employee: &NewEmployee) -> Result<Employee, sqlx::Error> {
    let sql = format!(
        "INSERT INTO employees (first_name, last_name, department_id, salary_cents, birthdate) \
         VALUES (?, ?, ?, ?, ?) RETURNING {}",
        COLUMNS
    );
    sqlx::query_as::<_, Employee>(&sql)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.department_id)
        .bind(employee.salary)
        .bind(employee.birthdate)
        .fetch_one(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    let sql = format!("SELECT {} FROM employees WHERE id = ?", COLUMNS);
    sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All employees in creation order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    let sql = format!("SELECT {} FROM employees ORDER BY id", COLUMNS);
    sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await
}

/// Writes every mutable column of `employee` back to its row.
pub async fn save(pool: &SqlitePool, employee: &Employee) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE employees SET first_name = ?, last_name = ?, department_id = ?, \
         salary_cents = ?, birthdate = ?, cv = ? WHERE id = ?",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(employee.department_id)
    .bind(employee.salary)
    .bind(employee.birthdate)
    .bind(&employee.cv)
    .bind(employee.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Stored CV paths of every employee in a department.
pub async fn cv_paths_in_department(
    pool: &SqlitePool,
    department_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT cv FROM employees WHERE department_id = ? AND cv IS NOT NULL ORDER BY id",
    )
    .bind(department_id)
    .fetch_all(pool)
    .await
}
