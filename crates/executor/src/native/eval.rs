//! Binding and evaluation of native statements against one table.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde_json::Value;

use chronicle_core::{compare_values, HistoryTable, NullOrdering, Row};

use super::{CompareOp, Operand, Predicate, Statement};
use crate::criteria::like;
use crate::types::Direction;
use crate::{Error, Result};

#[derive(Debug, Clone)]
enum Bound {
    Compare(CompareOp, Value),
    Like(String),
    IsNull,
    IsNotNull,
}

/// A statement checked against a table, with parameters substituted.
#[derive(Debug, Clone)]
pub(crate) struct CompiledQuery {
    filters: Vec<(&'static str, Bound)>,
    order_by: Vec<(&'static str, Direction)>,
}

impl CompiledQuery {
    /// Check `stmt` against the table of `R` and bind its parameters.
    pub(crate) fn compile<R: Row>(
        stmt: Statement,
        parameters: &BTreeMap<String, Value>,
    ) -> Result<Self> {
        let table: HistoryTable = stmt.table.parse()?;
        if table != R::TABLE {
            return Err(Error::malformed(format!(
                "query selects from {} but targets {}",
                table,
                R::TABLE
            )));
        }

        let resolve = |column: &str| -> Result<&'static str> {
            let name = match column.split_once('.') {
                Some((qualifier, name)) => {
                    let known = stmt
                        .alias
                        .as_deref()
                        .map_or(false, |a| a.eq_ignore_ascii_case(qualifier))
                        || qualifier.eq_ignore_ascii_case(R::TABLE.table_name());
                    if !known {
                        return Err(Error::malformed(format!(
                            "unknown table qualifier '{}'",
                            qualifier
                        )));
                    }
                    name
                }
                None => column,
            };
            R::COLUMNS
                .iter()
                .copied()
                .find(|c| c.eq_ignore_ascii_case(name))
                .ok_or_else(|| Error::malformed(format!("unknown column {} in {}", name, R::TABLE)))
        };

        let bind = |operand: &Operand| -> Result<Value> {
            match operand {
                Operand::Literal(v) => Ok(v.clone()),
                Operand::Param(name) => parameters.get(name).cloned().ok_or_else(|| {
                    Error::malformed(format!("no value bound for parameter '{}'", name))
                }),
            }
        };

        let mut filters = Vec::with_capacity(stmt.conditions.len());
        for cond in &stmt.conditions {
            let column = resolve(&cond.column)?;
            let bound = match &cond.predicate {
                Predicate::Compare(op, operand) => Bound::Compare(*op, bind(operand)?),
                Predicate::Like(operand) => match bind(operand)? {
                    Value::String(pattern) => Bound::Like(pattern),
                    other => {
                        return Err(Error::malformed(format!(
                            "LIKE pattern for {} must be a string, got {}",
                            column, other
                        )))
                    }
                },
                Predicate::IsNull => Bound::IsNull,
                Predicate::IsNotNull => Bound::IsNotNull,
            };
            filters.push((column, bound));
        }

        let mut order_by = Vec::with_capacity(stmt.order_by.len());
        for (column, direction) in &stmt.order_by {
            order_by.push((resolve(column)?, *direction));
        }

        Ok(Self {
            filters,
            order_by,
        })
    }

    fn matches<R: Row>(&self, row: &R) -> bool {
        self.filters.iter().all(|(column, bound)| {
            let value = row.column(column).unwrap_or(Value::Null);
            match bound {
                Bound::IsNull => value.is_null(),
                Bound::IsNotNull => !value.is_null(),
                Bound::Like(pattern) => value.as_str().map_or(false, |s| like(pattern, s)),
                Bound::Compare(op, operand) => match sql_compare(&value, operand) {
                    None => false,
                    Some(ord) => match op {
                        CompareOp::Eq => ord == Ordering::Equal,
                        CompareOp::Ne => ord != Ordering::Equal,
                        CompareOp::Lt => ord == Ordering::Less,
                        CompareOp::Le => ord != Ordering::Greater,
                        CompareOp::Gt => ord == Ordering::Greater,
                        CompareOp::Ge => ord != Ordering::Less,
                    },
                },
            }
        })
    }
}

/// Compare like SQL does: anything against NULL, and values of different
/// types, are unknown.
fn sql_compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_))
        | (Value::Bool(_), Value::Bool(_)) => Some(compare_values(a, b, NullOrdering::High)),
        _ => None,
    }
}

/// Rows of `rows` matching `query`, in the order it asks for.
///
/// Without an ORDER BY clause rows come back by ascending `ID_`.
pub(crate) fn evaluate<'a, R, I>(rows: I, query: &CompiledQuery, nulls: NullOrdering) -> Vec<R>
where
    R: Row + Clone + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut selected: Vec<R> = rows.into_iter().filter(|r| query.matches(*r)).cloned().collect();
    let default_order = [("ID_", Direction::Asc)];
    let order: &[(&'static str, Direction)] = if query.order_by.is_empty() {
        &default_order
    } else {
        &query.order_by
    };
    selected.sort_by(|a, b| crate::handlers::compare_rows(a, b, order, nulls));
    selected
}
