use crate::formula::func::{aggregate, globally, group, implies, weak_until};
use crate::formula::{Forall, Formula, Notation};
use crate::generators::Generator;
use crate::params::{OdShape, Signature};
use crate::prop::PropKind;

/// Observational determinism between two traces, in one of three shapes:
///
/// ```text
/// 1: G((<inputs agree>)=>G(<outputs agree>))
/// 2: (<inputs agree>)=>G(<outputs agree>)
/// 3: (<outputs agree>) W (<some input differs>)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationalDeterminism {
    pub signature: Signature,
    pub shape: OdShape,
}

impl ObservationalDeterminism {
    pub fn new(signature: Signature, shape: OdShape) -> Self {
        Self { signature, shape }
    }

    /// Body of shape 2, reused under `G` by shape 1.
    fn implication(&self) -> Formula {
        let s = &self.signature;
        implies(
            group(aggregate(s.agree(PropKind::Input, 0, 1))),
            globally(aggregate(s.agree(PropKind::Output, 0, 1))),
        )
    }
}

impl Generator for ObservationalDeterminism {
    const NAME: &'static str = "od";
    const NOTATION: Notation = Notation::OBSERVATIONAL;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn quantifiers(&self) -> Forall {
        self.signature.forall(2)
    }

    fn matrix(&self) -> Formula {
        let s = &self.signature;
        match self.shape {
            OdShape::Global => globally(self.implication()),
            OdShape::Implication => self.implication(),
            OdShape::WeakUntil => weak_until(
                group(aggregate(s.agree(PropKind::Output, 0, 1))),
                group(aggregate(s.differ(PropKind::Input, 0, 1))),
            ),
        }
    }
}
