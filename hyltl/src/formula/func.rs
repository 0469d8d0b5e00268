//! Free-function builders for [`Formula`] trees.
use crate::aggregate::{Aggregate, Junction};
use crate::formula::Formula;

#[inline]
pub fn falsum() -> Formula {
    Formula::False
}

#[inline]
pub fn not(inner: Formula) -> Formula {
    Formula::Not(Box::new(inner))
}

#[inline]
pub fn group(inner: Formula) -> Formula {
    Formula::Group(Box::new(inner))
}

#[inline]
pub fn next(inner: Formula) -> Formula {
    Formula::Next(Box::new(inner))
}

#[inline]
pub fn finally(inner: Formula) -> Formula {
    Formula::Finally(Box::new(inner))
}

#[inline]
pub fn globally(inner: Formula) -> Formula {
    Formula::Globally(Box::new(inner))
}

#[inline]
pub fn and(lhs: Formula, rhs: Formula) -> Formula {
    Formula::And(Box::new(lhs), Box::new(rhs))
}

#[inline]
pub fn implies(lhs: Formula, rhs: Formula) -> Formula {
    Formula::Implies(Box::new(lhs), Box::new(rhs))
}

#[inline]
pub fn weak_until(lhs: Formula, rhs: Formula) -> Formula {
    Formula::WeakUntil(Box::new(lhs), Box::new(rhs))
}

/// Join `items` with `junction`; no parentheses are added around the result.
#[inline]
pub fn chain(junction: Junction, items: impl IntoIterator<Item = Formula>) -> Formula {
    Formula::Chain(junction, items.into_iter().collect())
}

/// Shorthand for `chain(Junction::All, items)`.
#[inline]
pub fn conjunction(items: impl IntoIterator<Item = Formula>) -> Formula {
    chain(Junction::All, items)
}

#[inline]
pub fn aggregate(aggregate: Aggregate) -> Formula {
    Formula::Aggregate(aggregate)
}
