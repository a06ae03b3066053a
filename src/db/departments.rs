use sqlx::SqlitePool;

use crate::models::department::Department;

pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Department, sqlx::Error> {
    sqlx::query_as::<_, Department>("INSERT INTO departments (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn save(pool: &SqlitePool, department: &Department) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE departments SET name = ? WHERE id = ?")
        .bind(&department.name)
        .bind(department.id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes the department and, through the foreign key, its employees.
/// Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM departments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_employees(pool: &SqlitePool, id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE department_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
}
