mod schema;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        // Check if schema_version table exists
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Expenses ──────────────────────────────────────────────

    /// Validate and insert a new expense. Returns the assigned id.
    pub(crate) fn add_expense(
        &self,
        date: &str,
        category: &str,
        amount: Decimal,
        notes: &str,
    ) -> Result<i64> {
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(Error::Validation(format!(
                "date must be YYYY-MM-DD, got '{date}'"
            )));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::Validation("category must not be empty".into()));
        }
        if amount < Decimal::ZERO {
            return Err(Error::Validation(format!(
                "amount must not be negative, got {amount}"
            )));
        }

        self.conn.execute(
            "INSERT INTO expenses (date, category, amount, notes, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                date,
                category,
                amount.to_string(),
                notes.trim(),
                chrono::Local::now().to_rfc3339(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All expenses matching the filter, ordered by date then id ascending.
    pub(crate) fn get_expenses(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut sql = String::from(
            "SELECT id, date, category, amount, notes, created_at
             FROM expenses WHERE 1=1",
        );
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(from) = &filter.from {
            sql.push_str(&format!(" AND date >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(from.clone()));
        }
        if let Some(to) = &filter.to {
            sql.push_str(&format!(" AND date <= ?{}", param_values.len() + 1));
            param_values.push(Box::new(to.clone()));
        }
        if let Some(cat) = &filter.category {
            sql.push_str(&format!(
                " AND lower(category) = lower(?{})",
                param_values.len() + 1
            ));
            param_values.push(Box::new(cat.clone()));
        }
        if let Some(min) = filter.min_amount {
            sql.push_str(&format!(
                " AND CAST(amount AS REAL) >= CAST(?{} AS REAL)",
                param_values.len() + 1
            ));
            param_values.push(Box::new(min.to_string()));
        }
        if let Some(max) = filter.max_amount {
            sql.push_str(&format!(
                " AND CAST(amount AS REAL) <= CAST(?{} AS REAL)",
                param_values.len() + 1
            ));
            param_values.push(Box::new(max.to_string()));
        }

        sql.push_str(" ORDER BY date ASC, id ASC");

        let params_ref: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_ref.as_slice(), |row| {
            let amount_str: String = row.get(3)?;
            Ok(Expense {
                id: Some(row.get(0)?),
                date: row.get(1)?,
                category: row.get(2)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                notes: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn get_expense_by_id(&self, id: i64) -> Result<Option<Expense>> {
        let result = self.conn.query_row(
            "SELECT id, date, category, amount, notes, created_at FROM expenses WHERE id = ?1",
            params![id],
            |row| {
                let amount_str: String = row.get(3)?;
                Ok(Expense {
                    id: Some(row.get(0)?),
                    date: row.get(1)?,
                    category: row.get(2)?,
                    amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                    notes: row.get(4)?,
                    created_at: row.get(5)?,
                })
            },
        );
        match result {
            Ok(e) => Ok(Some(e)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn delete_expense(&self, id: i64) -> Result<()> {
        let changed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(Error::NotFound(id));
        }
        Ok(())
    }

    pub(crate) fn get_expense_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests;
