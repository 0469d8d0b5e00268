//! Benchmark generators.
//!
//! Each generator wires the formula builders into one fixed template driven by a
//! [`Signature`] plus a family-specific shape parameter, and produces a [`Hyperformula`]
//! carrying the family's [`Notation`].
mod hd;
mod od;
mod qn;

pub use hd::HammingDistance;
pub use od::ObservationalDeterminism;
pub use qn::QuantitativeNoninterference;

use log::{debug, warn};

use crate::formula::{Forall, Formula, Hyperformula, Notation};
use crate::params::Signature;

/// A parameterized benchmark family.
pub trait Generator {
    /// Short family name used in logs.
    const NAME: &'static str;

    /// Concrete syntax of the family.
    const NOTATION: Notation;

    /// Parameters shared by all families.
    fn signature(&self) -> &Signature;

    /// Quantifier prefix.
    fn quantifiers(&self) -> Forall;

    /// Quantifier-free body.
    fn matrix(&self) -> Formula;

    /// Build the complete formula. Construction happens once, before any printing.
    fn build(&self) -> Hyperformula {
        let signature = self.signature();
        if signature.is_degenerate() {
            warn!(
                "{}: {} input and {} output propositions; empty aggregates render as `()`",
                Self::NAME,
                signature.inputs,
                signature.outputs
            );
        }

        let quantifiers = self.quantifiers();
        let matrix = self.matrix();
        debug!(
            "{}: built {} nodes under {} quantifiers",
            Self::NAME,
            matrix.size(),
            quantifiers.len()
        );

        Hyperformula {
            notation: Self::NOTATION,
            quantifiers,
            matrix,
        }
    }
}
