//! Filter predicates and the caller-owned predicate set
//!
//! Predicates have a compact text form used on the command line:
//!
//! - `<column>:eq:<value>`
//! - `<column>:range:<start>:<end>`
//! - `<column>:in:<v1>,<v2>,...`
//!
//! In the `in` form a literal `,` or `\` inside a value is written `\,` or `\\`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::classify::ColumnKind;
use super::error::ExploreError;

/// A single per-column filter condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// Exact floating-point equality. Callers needing a tolerance should use a
    /// narrow [`Predicate::RangeWithin`] instead.
    ConstantEquals { column: String, value: f64 },
    /// `low <= value <= high`.
    RangeWithin { column: String, low: f64, high: f64 },
    /// The value's text form is one of `allowed`.
    ValueIn {
        column: String,
        allowed: BTreeSet<String>,
    },
}

impl Predicate {
    pub fn constant(column: impl Into<String>, value: f64) -> Self {
        Predicate::ConstantEquals {
            column: column.into(),
            value,
        }
    }

    pub fn range(column: impl Into<String>, low: f64, high: f64) -> Self {
        Predicate::RangeWithin {
            column: column.into(),
            low,
            high,
        }
    }

    pub fn value_in<I, S>(column: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::ValueIn {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Column this predicate reads.
    pub fn column(&self) -> &str {
        match self {
            Predicate::ConstantEquals { column, .. }
            | Predicate::RangeWithin { column, .. }
            | Predicate::ValueIn { column, .. } => column,
        }
    }

    /// Column kind this predicate can be applied to.
    pub fn required_kind(&self) -> ColumnKind {
        match self {
            Predicate::ConstantEquals { .. } | Predicate::RangeWithin { .. } => {
                ColumnKind::Numeric
            }
            Predicate::ValueIn { .. } => ColumnKind::Categorical,
        }
    }

    /// Short human-readable name of the predicate variant.
    pub fn operation(&self) -> &'static str {
        match self {
            Predicate::ConstantEquals { .. } => "constant-value filter",
            Predicate::RangeWithin { .. } => "range filter",
            Predicate::ValueIn { .. } => "value filter",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::ConstantEquals { column, value } => write!(f, "{column}:eq:{value}"),
            Predicate::RangeWithin { column, low, high } => {
                write!(f, "{column}:range:{low}:{high}")
            }
            Predicate::ValueIn { column, allowed } => {
                let values: Vec<String> = allowed.iter().map(|v| escape_value(v)).collect();
                write!(f, "{column}:in:{}", values.join(","))
            }
        }
    }
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == ',' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Split a value list on commas not preceded by a backslash, unescaping as it goes.
fn split_values(args: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut chars = args.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => current.push(next),
                None => current.push('\\'),
            },
            ',' => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);
    values
}

const OPERATORS: [&str; 3] = [":eq:", ":range:", ":in:"];

impl FromStr for Predicate {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ExploreError::InvalidPredicate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        // The earliest operator marker splits column from arguments, so column
        // names may contain ':' as long as they do not contain a marker.
        let (pos, op) = OPERATORS
            .iter()
            .filter_map(|op| s.find(op).map(|pos| (pos, *op)))
            .min_by_key(|(pos, _)| *pos)
            .ok_or_else(|| invalid("expected <column>:eq|range|in:<args>"))?;

        let column = &s[..pos];
        if column.is_empty() {
            return Err(invalid("column name is empty"));
        }
        let args = &s[pos + op.len()..];

        let parse_number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .map_err(|_| invalid(&format!("'{}' is not a valid number", text)))
        };

        match op {
            ":eq:" => Ok(Predicate::constant(column, parse_number(args)?)),
            ":range:" => {
                let (low, high) = args
                    .split_once(':')
                    .ok_or_else(|| invalid("range needs <start>:<end>"))?;
                Ok(Predicate::range(column, parse_number(low)?, parse_number(high)?))
            }
            _ => {
                let allowed: BTreeSet<String> = split_values(args)
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .collect();
                if allowed.is_empty() {
                    return Err(invalid("value filter needs at least one value"));
                }
                Ok(Predicate::ValueIn {
                    column: column.to_string(),
                    allowed,
                })
            }
        }
    }
}

/// The full collection of active predicates, combined with logical AND.
///
/// Several predicates may target the same column; they are conjoined, never
/// replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    /// Remove and return the predicate at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Predicate> {
        (index < self.predicates.len()).then(|| self.predicates.remove(index))
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Predicate> {
        self.predicates.iter()
    }
}

impl From<Vec<Predicate>> for PredicateSet {
    fn from(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }
}

impl FromIterator<Predicate> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PredicateSet {
    type Item = &'a Predicate;
    type IntoIter = std::slice::Iter<'a, Predicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}
