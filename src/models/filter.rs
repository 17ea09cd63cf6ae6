use rust_decimal::Decimal;

/// Optional query constraints, combined with logical AND.
/// All bounds are inclusive. Category matching is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Earliest date, "YYYY-MM-DD"
    pub from: Option<String>,
    /// Latest date, "YYYY-MM-DD"
    pub to: Option<String>,
    pub category: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

impl ExpenseFilter {
    pub fn is_empty(&self) -> bool {
        self.from.is_none()
            && self.to.is_none()
            && self.category.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }
}
