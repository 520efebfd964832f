//! Repositories wrapping sea-orm queries for each table.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against a pooled connection or inside a transaction.

pub mod area;
pub mod artist;
pub mod show;
pub mod venue;

use sea_orm::sea_query::{BinOper, Expr, ExprTrait, Func, IntoColumnRef};

/// Matches rows whose `column` contains `term`, ignoring case.
///
/// Both sides are folded by the database's `LOWER` so the column and the term are
/// compared under the same case mapping.
pub(crate) fn name_contains(column: impl IntoColumnRef, term: &str) -> Expr {
    let pattern = Expr::Binary(
        Box::new(Func::lower(Expr::val(contains_pattern(term))).into()),
        BinOper::Escape,
        Box::new(Expr::Constant('\\'.into())),
    );

    Expr::expr(Func::lower(Expr::col(column))).binary(BinOper::Like, pattern)
}

/// Builds a LIKE pattern matching `term` anywhere in a column.
///
/// `%`, `_` and the `\` escape character are matched literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
