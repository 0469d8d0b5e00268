//! Annotated printer for formulas, writing through `pretty`'s render sinks.
//!
//! Role
//! - Serialize a [`Formula`] (under a [`Notation`]) token by token into any
//!   [`RenderAnnotated`] sink: [`FmtWrite`] for plain text, a termcolor-backed writer for
//!   colored terminal output.
//! - Tokens never contain line breaks and no layout is computed, so the text matches the
//!   concrete syntax of the target model checker exactly.
//!
//! Traversal
//! - An explicit stack of pending steps replaces recursion, so windows of any depth
//!   print in constant native stack. The pending stack grows with the nesting depth.
//! - Annotations never nest: every token is pushed, written and popped on its own.

use crate::aggregate::Aggregate;
use crate::formula::{Forall, Formula, Hyperformula, Notated, Notation};
use crate::prop::Proposition;
use pretty::{FmtWrite, RenderAnnotated};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Styles used to annotate printed tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct, // periods after quantifiers
    /// Parentheses are colored by nesting depth so matching pairs share a color.
    Paren(u8),
    Keyword,  // forall, X, F, G, W
    Operator, // !, ~, &, |, ->, =>, <->
    Ident,    // propositions and trace variables
    Constant, // False
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Paren(depth) => {
                let fg = match depth % 6 {
                    0 => Color::Blue,
                    1 => Color::Green,
                    2 => Color::White,
                    3 => Color::Yellow,
                    4 => Color::Red,
                    5 => Color::Magenta,
                    _ => unreachable!(),
                };
                s.set_fg(Some(fg)).set_dimmed(true);
            }
            Style::Keyword => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Operator => {
                s.set_fg(Some(Color::Yellow)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green));
            }
            Style::Constant => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

static PUNCT: Style = Style::Punct;
static KEYWORD: Style = Style::Keyword;
static OPERATOR: Style = Style::Operator;
static IDENT: Style = Style::Ident;
static CONSTANT: Style = Style::Constant;
static PARENS: [Style; 6] = [
    Style::Paren(0),
    Style::Paren(1),
    Style::Paren(2),
    Style::Paren(3),
    Style::Paren(4),
    Style::Paren(5),
];

#[inline]
fn paren(depth: usize) -> &'static Style {
    &PARENS[depth % 6]
}

fn styled<R>(out: &mut R, style: &'static Style, text: &str) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    out.push_annotation(style)?;
    out.write_str_all(text)?;
    out.pop_annotation()
}

fn ident<R>(out: &mut R, p: &Proposition) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    styled(out, &IDENT, &p.to_string())
}

/// Pending output of the printer.
#[derive(Clone, Copy)]
enum Step<'f> {
    Visit(&'f Formula, usize),
    Aggregate(&'f Aggregate, usize),
    Token(&'static Style, &'static str),
    Open(usize),
    Close(usize),
    Space,
}

fn parenthesized<'f>(inner: &'f Formula, depth: usize, steps: &mut Vec<Step<'f>>) {
    steps.extend([
        Step::Open(depth),
        Step::Visit(inner, depth + 1),
        Step::Close(depth),
    ]);
}

fn binary<'f>(
    lhs: &'f Formula,
    glyph: &[Step<'f>],
    rhs: &'f Formula,
    notation: &Notation,
    depth: usize,
    steps: &mut Vec<Step<'f>>,
) {
    if notation.bracket_binary {
        steps.push(Step::Open(depth));
        steps.push(Step::Visit(lhs, depth + 1));
        steps.extend_from_slice(glyph);
        steps.push(Step::Visit(rhs, depth + 1));
        steps.push(Step::Close(depth));
    } else {
        steps.push(Step::Visit(lhs, depth));
        steps.extend_from_slice(glyph);
        steps.push(Step::Visit(rhs, depth));
    }
}

/// Steps printing one node, in output order. Children stay unexpanded.
fn expand<'f>(f: &'f Formula, notation: &Notation, depth: usize, steps: &mut Vec<Step<'f>>) {
    match f {
        Formula::False => steps.push(Step::Token(&CONSTANT, "False")),
        Formula::Not(inner) => {
            steps.push(Step::Token(&OPERATOR, notation.negation));
            parenthesized(inner, depth, steps);
        }
        Formula::Group(inner) => parenthesized(inner, depth, steps),
        Formula::Next(inner) => {
            steps.push(Step::Token(&KEYWORD, "X"));
            parenthesized(inner, depth, steps);
        }
        Formula::Finally(inner) => {
            steps.push(Step::Token(&KEYWORD, "F"));
            parenthesized(inner, depth, steps);
        }
        Formula::Globally(inner) => {
            steps.push(Step::Token(&KEYWORD, "G"));
            parenthesized(inner, depth, steps);
        }
        Formula::And(a, b) => {
            binary(a, &[Step::Token(&OPERATOR, " & ")], b, notation, depth, steps)
        }
        Formula::Implies(a, b) => binary(
            a,
            &[Step::Token(&OPERATOR, notation.implication)],
            b,
            notation,
            depth,
            steps,
        ),
        Formula::WeakUntil(a, b) => binary(
            a,
            &[Step::Space, Step::Token(&KEYWORD, "W"), Step::Space],
            b,
            notation,
            depth,
            steps,
        ),
        Formula::Chain(junction, items) => {
            for (at, item) in items.iter().enumerate() {
                if at > 0 {
                    steps.push(Step::Token(&OPERATOR, junction.joiner()));
                }
                steps.push(Step::Visit(item, depth));
            }
        }
        Formula::Aggregate(agg) => steps.push(Step::Aggregate(agg, depth)),
    }
}

/// `(a <-> b)`
fn equivalence<R>(
    out: &mut R,
    lhs: &Proposition,
    rhs: &Proposition,
    depth: usize,
) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    styled(out, paren(depth), "(")?;
    ident(out, lhs)?;
    styled(out, &OPERATOR, " <-> ")?;
    ident(out, rhs)?;
    styled(out, paren(depth), ")")
}

/// Terms joined by the junction; negated terms print as `!(a <-> b)` or `(~(a <-> b))`
/// depending on the notation.
fn emit_aggregate<R>(
    out: &mut R,
    agg: &Aggregate,
    notation: &Notation,
    depth: usize,
) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    let negated = agg.polarity.is_differ();
    for (at, (lhs, rhs)) in agg.terms().enumerate() {
        if at > 0 {
            styled(out, &OPERATOR, agg.junction().joiner())?;
        }
        if !negated {
            equivalence(out, &lhs, &rhs, depth)?;
        } else if notation.bracket_negated_terms {
            styled(out, paren(depth), "(")?;
            styled(out, &OPERATOR, notation.negation)?;
            equivalence(out, &lhs, &rhs, depth + 1)?;
            styled(out, paren(depth), ")")?;
        } else {
            styled(out, &OPERATOR, notation.negation)?;
            equivalence(out, &lhs, &rhs, depth)?;
        }
    }
    Ok(())
}

fn emit_formula<R>(out: &mut R, root: &Formula, notation: &Notation) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    let mut pending = vec![Step::Visit(root, 0)];
    let mut expanded = Vec::new();

    while let Some(step) = pending.pop() {
        match step {
            Step::Visit(f, depth) => {
                expand(f, notation, depth, &mut expanded);
                // Reversed so the first step is popped first
                pending.extend(expanded.drain(..).rev());
            }
            Step::Aggregate(agg, depth) => emit_aggregate(out, agg, notation, depth)?,
            Step::Token(style, text) => styled(out, style, text)?,
            Step::Open(depth) => styled(out, paren(depth), "(")?,
            Step::Close(depth) => styled(out, paren(depth), ")")?,
            Step::Space => out.write_str_all(" ")?,
        }
    }
    Ok(())
}

fn emit_quantifiers<R>(out: &mut R, q: &Forall) -> Result<(), R::Error>
where
    R: RenderAnnotated<'static, Style>,
{
    for t in q.traces() {
        styled(out, &KEYWORD, "forall")?;
        out.write_str_all(" ")?;
        styled(out, &IDENT, &t.to_string())?;
        styled(out, &PUNCT, ".")?;
        out.write_str_all(" ")?;
    }
    Ok(())
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

// ======================== Trait impls =========================
/// Printing conveniences for formulas that carry a notation.
pub trait PrettyFormula {
    /// Write the annotated tokens into any `pretty` render sink.
    fn render_annotated<R>(&self, out: &mut R) -> Result<(), R::Error>
    where
        R: RenderAnnotated<'static, Style>;

    /// Render with colors to any termcolor writer. Colors are only emitted if the writer
    /// supports them (e.g. a `StandardStream` created with `ColorChoice::Never` stays plain).
    fn pretty_render_to<W: WriteColor + Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_annotated(&mut ColorWriter { out })
    }

    /// Print to stdout with the given color choice.
    fn pretty_print(&self, choice: ColorChoice) -> io::Result<()> {
        let stdout = StandardStream::stdout(choice);
        let mut stdout = stdout.lock();
        self.pretty_render_to(&mut stdout)?;
        stdout.flush()
    }

    /// Format into a plain string (no colors).
    fn pretty_string(&self) -> String {
        let mut buf = String::new();
        let _ = self.render_annotated(&mut FmtWrite::new(&mut buf));
        buf
    }
}

impl PrettyFormula for Hyperformula {
    fn render_annotated<R>(&self, out: &mut R) -> Result<(), R::Error>
    where
        R: RenderAnnotated<'static, Style>,
    {
        emit_quantifiers(out, &self.quantifiers)?;
        emit_formula(out, &self.matrix, &self.notation)
    }
}

impl<'a> PrettyFormula for Notated<'a> {
    #[inline]
    fn render_annotated<R>(&self, out: &mut R) -> Result<(), R::Error>
    where
        R: RenderAnnotated<'static, Style>,
    {
        emit_formula(out, self.formula, &self.notation)
    }
}

impl std::fmt::Display for Hyperformula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render_annotated(&mut FmtWrite::new(f))
    }
}

impl<'a> std::fmt::Display for Notated<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render_annotated(&mut FmtWrite::new(f))
    }
}
