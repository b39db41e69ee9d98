//! Field-wise version ordering
//!
//! Version strings are split into maximal runs of ASCII digits (numeric fields)
//! and everything in between (literal fields). Numeric fields compare by value,
//! literal fields compare bytewise, so `10.0.0` orders after `9.0.0`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field<'a> {
    Number(&'a str),
    Literal(&'a str),
}

fn fields(version: &str) -> Vec<Field<'_>> {
    let mut result = Vec::new();
    let mut last = 0;

    for run in DIGIT_RUN.find_iter(version) {
        if run.start() > last {
            result.push(Field::Literal(&version[last..run.start()]));
        }
        result.push(Field::Number(run.as_str()));
        last = run.end();
    }

    if last < version.len() {
        result.push(Field::Literal(&version[last..]));
    }

    result
}

/// Compare two digit runs by numeric value, without any width limit
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Ordering of a numeric field relative to a literal field.
///
/// Behaves as if the number were zero-padded: literals starting below `'0'`
/// (`.`, `-`, `+`) sort first, anything else sorts after.
fn number_against_literal(literal: &str) -> Ordering {
    match literal.as_bytes().first() {
        Some(&byte) if byte < b'0' => Ordering::Greater,
        _ => Ordering::Less,
    }
}

fn compare_fields(a: Field<'_>, b: Field<'_>) -> Ordering {
    match (a, b) {
        (Field::Number(x), Field::Number(y)) => compare_numbers(x, y),
        (Field::Literal(x), Field::Literal(y)) => x.cmp(y),
        (Field::Number(_), Field::Literal(l)) => number_against_literal(l),
        (Field::Literal(l), Field::Number(_)) => number_against_literal(l).reverse(),
    }
}

/// Compare two version strings field by field.
///
/// When one field list is a prefix of the other, the shorter one sorts first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_fields = fields(a);
    let b_fields = fields(b);

    a_fields
        .iter()
        .zip(&b_fields)
        .map(|(x, y)| compare_fields(*x, *y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a_fields.len().cmp(&b_fields.len()))
}

/// Returns true if `candidate` orders strictly after `base`
pub fn is_semantically_greater(candidate: &str, base: &str) -> bool {
    compare_versions(candidate, base) == Ordering::Greater
}
