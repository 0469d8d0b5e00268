//! Hyltl: parameterized HyperLTL formulas for hyperproperty model-checker benchmarks.
//!
//! The crate builds three families of benchmark properties over indexed input/output
//! atomic propositions observed on several traces at once:
//! - Hamming-distance bounds ([`generators::HammingDistance`])
//! - observational determinism ([`generators::ObservationalDeterminism`])
//! - quantitative noninterference ([`generators::QuantitativeNoninterference`])
//!
//! Construction and rendering are separate passes. A generator eagerly builds an owned
//! [`formula::Formula`] tree from validated parameters ([`params`]); the tree can be
//! inspected (structural equality, [`walker`]) before a single explicit-stack printer
//! ([`formula::pretty`]) serializes it. Glyph conventions that differ between the three
//! families (negation, implication, bracketing) live in a [`formula::Notation`].
//!
//! Example
//! ```
//! use hyltl::prelude::*;
//!
//! let signature = Signature::new("x", 1, 1);
//! let od = ObservationalDeterminism::new(signature, OdShape::Implication);
//! assert_eq!(
//!     od.build().to_string(),
//!     "forall x0. forall x1. ((in0_x0 <-> in0_x1))=>G((out0_x0 <-> out0_x1))"
//! );
//! ```

/// Per-proposition (in)equivalence aggregates across two traces.
pub mod aggregate;
/// Error type shared by the library and the command-line tools.
pub mod error;
/// Formula tree, builders, notation and pretty-printing.
pub mod formula;
/// The three benchmark generators.
pub mod generators;
/// Validated parameter types.
pub mod params;
/// Atomic proposition and trace naming.
pub mod prop;
/// Iterative walker over formula trees.
pub mod walker;

pub use error::{Error, Result};

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - Formula tree, free-function builders and notation presets
    //! - Pretty-printing via `PrettyFormula`
    //! - Parameter types and the generators
    pub use crate::aggregate::{Aggregate, Junction, Polarity};
    pub use crate::formula::{
        Forall, Formula, FormulaType, Hyperformula, Notation, func::*, pretty::PrettyFormula,
    };
    pub use crate::generators::{
        Generator, HammingDistance, ObservationalDeterminism, QuantitativeNoninterference,
    };
    pub use crate::params::{Distance, OdShape, Signature, TraceBound};
    pub use crate::prop::{PropKind, Proposition, Trace};
    pub use crate::walker::{WalkerNode, walk, walk_no_input};
}
