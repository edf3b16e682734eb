//! Predicate-tree rendering into parameterized SQL.
//!
//! Field names resolve against a closed column mapping, so a predicate can
//! never inject identifiers; values always travel as bind parameters.

use crate::domain::query::{CompareOp, Comparison, FieldRef, Predicate};
use crate::error::AppError;
use serde_json::json;
use sqlx::{Postgres, QueryBuilder};

/// Resolves a predicate field against the customers table.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for fields outside the customer schema.
pub(crate) fn column_for(field: FieldRef) -> Result<&'static str, AppError> {
    match field.as_str() {
        "firstname" => Ok("firstname"),
        "lastname" => Ok("lastname"),
        "email_address" => Ok("email_address"),
        other => Err(AppError::bad_request(
            "Unknown predicate field",
            json!({ "field": other }),
        )),
    }
}

/// Appends the WHERE-clause fragment for a predicate tree.
pub(crate) fn push_predicate(
    builder: &mut QueryBuilder<'_, Postgres>,
    predicate: &Predicate,
) -> Result<(), AppError> {
    match predicate {
        Predicate::And(left, right) => push_binary(builder, left, " AND ", right),
        Predicate::Or(left, right) => push_binary(builder, left, " OR ", right),
        Predicate::Compare(comparison) => push_comparison(builder, comparison),
    }
}

fn push_binary(
    builder: &mut QueryBuilder<'_, Postgres>,
    left: &Predicate,
    op: &'static str,
    right: &Predicate,
) -> Result<(), AppError> {
    builder.push("(");
    push_predicate(builder, left)?;
    builder.push(op);
    push_predicate(builder, right)?;
    builder.push(")");
    Ok(())
}

fn push_comparison(
    builder: &mut QueryBuilder<'_, Postgres>,
    comparison: &Comparison,
) -> Result<(), AppError> {
    let column = column_for(comparison.field)?;
    builder.push(column);

    match comparison.op {
        CompareOp::Eq => {
            builder.push(" = ");
            builder.push_bind(comparison.value.clone());
        }
        CompareOp::StartsWith => {
            builder.push(" LIKE ");
            builder.push_bind(format!("{}%", escape_like(&comparison.value)));
            builder.push(" ESCAPE '\\'");
        }
        CompareOp::Contains => {
            builder.push(" LIKE ");
            builder.push_bind(format!("%{}%", escape_like(&comparison.value)));
            builder.push(" ESCAPE '\\'");
        }
    }

    Ok(())
}

/// Escapes LIKE metacharacters so user input only ever matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
