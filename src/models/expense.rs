use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub category: String,
    pub amount: Decimal,
    pub notes: String,
    pub created_at: String,
}

impl Expense {
    /// The "YYYY-MM" prefix of the expense date.
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }
}
