mod expense;
mod filter;

pub use expense::Expense;
pub use filter::ExpenseFilter;
