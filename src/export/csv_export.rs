use std::path::Path;

use crate::error::Result;
use crate::models::Expense;

/// Write expenses to a CSV file with header `id,date,category,amount,notes`.
/// Fields containing commas or quotes are quoted by the writer.
/// Returns the number of data rows written.
pub(crate) fn export_csv(path: &Path, expenses: &[Expense]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["id", "date", "category", "amount", "notes"])?;
    for e in expenses {
        wtr.write_record([
            e.id.unwrap_or(0).to_string(),
            e.date.clone(),
            e.category.clone(),
            e.amount.to_string(),
            e.notes.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(expenses.len())
}
