//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Money, MoneyFormatter};
use domain_statement::Statement;

/// Asserts that a Money value equals `expected` minor units
///
/// # Panics
///
/// Panics if the amount differs or cannot be expressed in minor units
pub fn assert_money_minor_eq(actual: &Money, expected: i64) {
    let minor = actual
        .to_minor()
        .unwrap_or_else(|err| panic!("Money {} has no minor-unit form: {}", actual, err));
    assert_eq!(
        minor, expected,
        "Money amount mismatch: actual={} ({} minor), expected={} minor",
        actual, minor, expected
    );
}

/// Asserts that a statement's totals equal the sums of its lines
///
/// # Panics
///
/// Panics if either total disagrees with its lines
pub fn assert_statement_totals_consistent(statement: &Statement) {
    let minor_sum: i64 = statement
        .lines()
        .iter()
        .map(|l| {
            l.amount
                .to_minor()
                .unwrap_or_else(|err| panic!("Line amount {} has no minor-unit form: {}", l.amount, err))
        })
        .sum();
    assert_eq!(
        statement.total_minor(),
        minor_sum,
        "Total {} minor does not equal the sum of line amounts {} minor",
        statement.total_minor(),
        minor_sum
    );

    let credit_sum: u64 = statement.lines().iter().map(|l| l.volume_credits).sum();
    assert_eq!(
        statement.total_volume_credits(),
        credit_sum,
        "Total credits {} do not equal the sum of line credits {}",
        statement.total_volume_credits(),
        credit_sum
    );
}

/// Asserts that `money` renders as `expected` with `format`
///
/// # Panics
///
/// Panics if formatting fails or produces different text
pub fn assert_formats_as(format: &MoneyFormatter, money: &Money, expected: &str) {
    match format.format(money) {
        Ok(text) => assert_eq!(text, expected, "Unexpected formatting for {}", money),
        Err(err) => panic!("Formatting {} failed: {}", money, err),
    }
}
