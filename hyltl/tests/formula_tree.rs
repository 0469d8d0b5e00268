use hyltl::prelude::*;
use termcolor::{Buffer, WriteColor};

fn hd_text(f: &Formula) -> String {
    f.with_notation(Notation::HAMMING).pretty_string()
}

#[test]
fn combinators_render_their_documented_shape() {
    let s = Signature::default();
    let e = || aggregate(s.agree(PropKind::Output, 0, 1));

    assert_eq!(hd_text(&not(e())), "!((out0_x0 <-> out0_x1))");
    assert_eq!(hd_text(&and(e(), falsum())), "((out0_x0 <-> out0_x1) & False)");
    assert_eq!(hd_text(&implies(falsum(), e())), "(False -> (out0_x0 <-> out0_x1))");
    assert_eq!(hd_text(&next(e())), "X((out0_x0 <-> out0_x1))");
    assert_eq!(hd_text(&finally(e())), "F((out0_x0 <-> out0_x1))");
    assert_eq!(hd_text(&globally(e())), "G((out0_x0 <-> out0_x1))");
    assert_eq!(hd_text(&weak_until(e(), falsum())), "((out0_x0 <-> out0_x1) W False)");
    assert_eq!(hd_text(&group(falsum())), "(False)");
}

#[test]
fn notation_controls_glyphs_and_brackets() {
    let f = implies(falsum(), not(falsum()));
    assert_eq!(
        f.with_notation(Notation::HAMMING).to_string(),
        "(False -> !(False))"
    );
    assert_eq!(
        f.with_notation(Notation::OBSERVATIONAL).to_string(),
        "False=>~(False)"
    );

    let s = Signature::default();
    let differ = aggregate(s.differ(PropKind::Input, 0, 1));
    assert_eq!(
        differ.with_notation(Notation::QUANTITATIVE).to_string(),
        "!(in0_x0 <-> in0_x1)"
    );
    assert_eq!(
        differ.with_notation(Notation::OBSERVATIONAL).to_string(),
        "(~(in0_x0 <-> in0_x1))"
    );
}

#[test]
fn chains_join_without_brackets() {
    let items = || vec![falsum(), next(falsum()), falsum()];
    assert_eq!(hd_text(&conjunction(items())), "False & X(False) & False");
    assert_eq!(
        hd_text(&chain(Junction::Any, items())),
        "False | X(False) | False"
    );
    assert_eq!(hd_text(&conjunction(Vec::new())), "");
    assert_eq!(hd_text(&group(conjunction(Vec::new()))), "()");
}

#[test]
fn operator_sugar_builds_the_same_tree() {
    let a = falsum() & !next(falsum());
    let b = and(falsum(), not(next(falsum())));
    assert_eq!(a, b);
    assert_eq!(falsum().and(falsum()), and(falsum(), falsum()));
    assert_eq!(falsum().implies(falsum()), implies(falsum(), falsum()));
    assert_eq!(falsum().weak_until(falsum()), weak_until(falsum(), falsum()));
    assert_eq!(falsum().group(), group(falsum()));
}

#[test]
fn structural_equality_across_independent_builds() {
    let s1 = Signature::new("x", 2, 2);
    let s2 = Signature::new("x", 2, 2);
    let a = HammingDistance::new(s1, Distance::new(2)).matrix();
    let b = HammingDistance::new(s2, Distance::new(2)).matrix();
    assert_eq!(a, b);

    let c = HammingDistance::new(Signature::new("y", 2, 2), Distance::new(2)).matrix();
    assert_ne!(a, c, "base name is part of the aggregates");

    let d = HammingDistance::new(Signature::new("x", 2, 2), Distance::new(3)).matrix();
    assert_ne!(a, d);
}

#[test]
fn formula_types_and_children() {
    let f = weak_until(falsum(), and(falsum(), next(falsum())));
    assert_eq!(f.r#type(), FormulaType::WeakUntil);
    let kinds: Vec<_> = f.children().map(Formula::r#type).collect();
    assert_eq!(kinds, [FormulaType::False, FormulaType::And]);
    assert_eq!(f.size(), 6);
    assert_eq!(f.count(FormulaType::False), 3);

    let chain = conjunction([falsum(), falsum()]);
    assert_eq!(chain.children().count(), 2);
    assert_eq!(chain.children().rev().count(), 2);
    assert_eq!(aggregate(Signature::default().agree(PropKind::Input, 0, 1)).children().count(), 0);
}

#[test]
fn quantifier_prefix_counts_up() {
    let q = Signature::new("t", 1, 1).forall(3);
    assert_eq!(q.len(), 3);
    assert!(!q.is_empty());
    let names: Vec<_> = q.traces().map(|t| t.to_string()).collect();
    assert_eq!(names, ["t0", "t1", "t2"]);

    let f = Hyperformula {
        notation: Notation::HAMMING,
        quantifiers: q,
        matrix: falsum(),
    };
    assert_eq!(f.to_string(), "forall t0. forall t1. forall t2. False");
    assert_eq!(f.pretty_string(), f.to_string());
}

#[test]
fn colored_rendering_keeps_the_plain_text() {
    let f = QuantitativeNoninterference::new(Signature::new("x", 2, 1), TraceBound::new(2)).build();

    let mut plain = Buffer::no_color();
    f.pretty_render_to(&mut plain).unwrap();
    assert_eq!(String::from_utf8(plain.into_inner()).unwrap(), f.to_string());

    let mut colored = Buffer::ansi();
    assert!(colored.supports_color());
    f.pretty_render_to(&mut colored).unwrap();
    let colored = String::from_utf8(colored.into_inner()).unwrap();
    assert!(colored.contains('\u{1b}'));
    assert_ne!(colored, f.to_string());
}

#[test]
fn sub_formulas_print_on_their_own() {
    let s = Signature::new("x", 2, 1);
    let f = finally(group(aggregate(s.differ(PropKind::Input, 0, 1))));
    assert_eq!(
        f.with_notation(Notation::OBSERVATIONAL).to_string(),
        "F(((~(in0_x0 <-> in0_x1)) | (~(in1_x0 <-> in1_x1))))"
    );

    let mut buf = Buffer::no_color();
    f.with_notation(Notation::HAMMING)
        .pretty_render_to(&mut buf)
        .unwrap();
    assert_eq!(
        String::from_utf8(buf.into_inner()).unwrap(),
        "F((!(in0_x0 <-> in0_x1) | !(in1_x0 <-> in1_x1)))"
    );
}

#[test]
fn deeply_nested_trees_print_and_drop() {
    let depth = 1_000_000;
    let f = (0..depth).fold(falsum(), |inner, _| next(inner));
    assert_eq!(f.size(), depth + 1);

    let text = f.with_notation(Notation::QUANTITATIVE).to_string();
    assert_eq!(text.len(), 3 * depth + "False".len());
    assert!(text.starts_with("X(X(X("));
    assert!(text.ends_with("False)))"));

    let wide = Formula::Chain(Junction::Any, (0..depth).map(|_| !falsum()).collect());
    assert_eq!(wide.count(FormulaType::Not), depth);
    drop(wide);
    drop(f);
}
