//! Typed values bound to PostgreSQL statements.

use bigdecimal::BigDecimal;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use uuid::Uuid;

/// A value that can be bound to a movie statement. One variant per column type.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(String),
    Int(i32),
    Decimal(BigDecimal),
    TextArray(Vec<String>),
    Uuid(Uuid),
}

impl BindValue {
    /// Bind this value as the next positional parameter of `query`.
    pub fn bind_to<'q>(&self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            BindValue::Text(s) => query.bind(s.clone()),
            BindValue::Int(n) => query.bind(*n),
            BindValue::Decimal(d) => query.bind(d.clone()),
            BindValue::TextArray(v) => query.bind(v.clone()),
            BindValue::Uuid(u) => query.bind(*u),
        }
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<i32> for BindValue {
    fn from(n: i32) -> Self {
        BindValue::Int(n)
    }
}

impl From<BigDecimal> for BindValue {
    fn from(d: BigDecimal) -> Self {
        BindValue::Decimal(d)
    }
}

impl From<Vec<String>> for BindValue {
    fn from(v: Vec<String>) -> Self {
        BindValue::TextArray(v)
    }
}

impl From<Uuid> for BindValue {
    fn from(u: Uuid) -> Self {
        BindValue::Uuid(u)
    }
}
