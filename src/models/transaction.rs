//! Transaction model
//!
//! A committed ledger entry: date, amount as entered, income/expense flag,
//! and a category.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::TransactionId;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Income,
    Expense,
}

impl TransactionType {
    /// The wire name ("income" / "expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Label used in the form selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Next variant, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Previous variant, wrapping around
    pub fn prev(self) -> Self {
        // Two variants: prev and next coincide
        self.next()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending/earning category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Salary,
    Groceries,
    Bills,
}

impl Category {
    /// The wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Groceries => "groceries",
            Self::Bills => "bills",
        }
    }

    /// Label used in the form selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Groceries => "Groceries",
            Self::Bills => "Bills",
        }
    }

    /// Next variant, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Salary => Self::Groceries,
            Self::Groceries => Self::Bills,
            Self::Bills => Self::Salary,
        }
    }

    /// Previous variant, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Self::Salary => Self::Bills,
            Self::Groceries => Self::Salary,
            Self::Bills => Self::Groceries,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A committed ledger entry
///
/// Field order matches the exported file: `date`, `amount`, `type`,
/// `category`, `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date as entered
    pub date: String,

    /// Amount as entered; not parsed until the balance is computed
    #[serde(deserialize_with = "amount_as_entered")]
    pub amount: String,

    /// Income or expense
    #[serde(rename = "type", default)]
    pub kind: TransactionType,

    /// Category
    #[serde(default)]
    pub category: Category,

    /// Unique identifier
    pub id: TransactionId,
}

impl Transaction {
    /// Create a transaction with all fields
    pub fn new(
        id: TransactionId,
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind,
            category,
            id,
        }
    }
}

/// Accept the amount either as a string or as a JSON number
fn amount_as_entered<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entered {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Entered::deserialize(deserializer)? {
        Entered::Text(s) => s,
        Entered::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1),
            "2024-01-01",
            "1000",
            TransactionType::Income,
            Category::Salary,
        )
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TransactionType::default(), TransactionType::Income);
        assert_eq!(Category::default(), Category::Salary);
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2024-01-01",
                "amount": "1000",
                "type": "income",
                "category": "salary",
                "id": 1
            })
        );
    }

    #[test]
    fn test_numeric_amount_is_accepted() {
        let txn: Transaction = serde_json::from_value(json!({
            "date": "2024-01-02",
            "amount": 200.5,
            "type": "expense",
            "category": "groceries",
            "id": 2
        }))
        .unwrap();
        assert_eq!(txn.amount, "200.5");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, Category::Groceries);
    }

    #[test]
    fn test_enum_cycling() {
        assert_eq!(TransactionType::Income.next(), TransactionType::Expense);
        assert_eq!(TransactionType::Expense.prev(), TransactionType::Income);
        assert_eq!(Category::Bills.next(), Category::Salary);
        assert_eq!(Category::Salary.prev(), Category::Bills);
        for c in [Category::Salary, Category::Groceries, Category::Bills] {
            assert_eq!(c.next().prev(), c);
        }

        assert_eq!(TransactionType::Expense.to_string(), "expense");
        assert_eq!(Category::Groceries.to_string(), "groceries");
    }
}
