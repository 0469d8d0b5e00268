use hyltl::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const ROUNDS: usize = 200;

fn random_signature(rng: &mut impl Rng) -> Signature {
    let var = ["x", "pi", "t", "trace"][rng.random_range(0..4)];
    Signature::new(var, rng.random_range(0..5), rng.random_range(0..5))
}

fn random_shape(rng: &mut impl Rng) -> OdShape {
    OdShape::try_from(rng.random_range(1..=3i64)).unwrap()
}

/// Every formula family under random parameters.
fn random_formula(rng: &mut impl Rng) -> (Hyperformula, Hyperformula) {
    let signature = random_signature(rng);
    match rng.random_range(0..3) {
        0 => {
            let g = HammingDistance::new(signature, Distance::new(rng.random_range(0..7)));
            (g.build(), g.clone().build())
        }
        1 => {
            let g = ObservationalDeterminism::new(signature, random_shape(rng));
            (g.build(), g.clone().build())
        }
        _ => {
            let g = QuantitativeNoninterference::new(
                signature,
                TraceBound::new(rng.random_range(0..5)),
            );
            (g.build(), g.clone().build())
        }
    }
}

fn assert_balanced(text: &str) {
    let mut open = 0usize;
    for (at, c) in text.char_indices() {
        match c {
            '(' => open += 1,
            ')' => {
                assert!(open > 0, "over-closed at byte {at} in {text}");
                open -= 1;
            }
            _ => {}
        }
    }
    assert_eq!(open, 0, "unclosed parentheses in {text}");
}

#[test]
fn rendering_is_deterministic() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    for _ in 0..ROUNDS {
        let (a, b) = random_formula(&mut rng);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a.to_string(), a.pretty_string());
    }
}

#[test]
fn parentheses_are_balanced() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x1337);
    for _ in 0..ROUNDS {
        let (f, _) = random_formula(&mut rng);
        assert_balanced(&f.to_string());
    }
}

#[test]
fn prefix_quantifies_every_trace_once() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let (f, _) = random_formula(&mut rng);
        let text = f.to_string();
        let mut prefix = String::new();
        for t in f.quantifiers.traces() {
            prefix.push_str(&format!("forall {t}. "));
        }
        assert!(text.starts_with(&prefix));
        assert_eq!(text.matches("forall ").count() as u64, f.quantifiers.len());
    }
}

#[test]
fn od_fallthrough_identity_holds_for_random_signatures() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for _ in 0..ROUNDS {
        let signature = random_signature(&mut rng);
        let prefix: String = (0..2)
            .map(|i| format!("forall {}{i}. ", signature.var()))
            .collect();
        let global = ObservationalDeterminism::new(signature.clone(), OdShape::Global)
            .build()
            .to_string();
        let implication = ObservationalDeterminism::new(signature, OdShape::Implication)
            .build()
            .to_string();
        let body = implication.strip_prefix(&prefix).unwrap();
        assert_eq!(global, format!("{prefix}G({body})"));
    }
}
