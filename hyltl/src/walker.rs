//! Iterative walker over formula trees.
//!
//! - [`walk`]: thread an input of any type through the traversal; each node decides which
//!   children to visit next and with which input.
//! - [`walk_no_input`]: convenience wrapper when no state needs threading.
//!
//! Traversal strategy
//! - Explicit stack, no recursion, so deep Hamming-distance chains are safe to inspect.
//! - Pre-order, left to right among the children scheduled by a node.
//! - Only children passed to [`WalkerNode::schedule_visit`] (or all of them through
//!   [`WalkerNode::schedule_children`]) are traversed, which makes pruning trivial.
//!
//! Example: count `Next` operators
//! ```
//! use hyltl::prelude::*;
//!
//! let f = next(next(falsum())) & next(falsum());
//! let mut nexts = 0;
//! walk_no_input(&f, |node| {
//!     if node.r#type() == FormulaType::Next {
//!         nexts += 1;
//!     }
//!     node.schedule_children(());
//! });
//! assert_eq!(nexts, 3);
//! ```
use std::ops::Deref;

use crate::formula::Formula;

/// Node handle passed to the visitor.
pub struct WalkerNode<'a, 's, I> {
    formula: &'a Formula,
    depth: usize,
    scheduled: &'s mut Vec<(&'a Formula, I)>,
}

impl<'a, 's, I> WalkerNode<'a, 's, I> {
    /// The visited formula.
    #[inline]
    pub fn formula(&self) -> &'a Formula {
        self.formula
    }

    /// Distance from the root (the root has depth 0).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Visit `child` after this node, with the given input.
    #[inline]
    pub fn schedule_visit(&mut self, child: &'a Formula, input: I) {
        self.scheduled.push((child, input));
    }

    /// Visit every direct child, each with a clone of `input`.
    pub fn schedule_children(&mut self, input: I)
    where
        I: Clone,
    {
        let formula = self.formula;
        for child in formula.children() {
            self.scheduled.push((child, input.clone()));
        }
    }
}

impl<'a, 's, I> Deref for WalkerNode<'a, 's, I> {
    type Target = Formula;

    fn deref(&self) -> &Self::Target {
        self.formula
    }
}

/// Walk `root`, calling `visitor` with the input scheduled for each node.
pub fn walk<'a, I, F>(root: &'a Formula, input: I, mut visitor: F)
where
    F: FnMut(I, &mut WalkerNode<'a, '_, I>),
{
    let mut stack: Vec<(&'a Formula, usize, I)> = vec![(root, 0, input)];
    let mut scheduled = Vec::new();

    while let Some((formula, depth, input)) = stack.pop() {
        let mut node = WalkerNode {
            formula,
            depth,
            scheduled: &mut scheduled,
        };
        visitor(input, &mut node);

        // Reversed so the first scheduled child is popped first
        stack.extend(
            scheduled
                .drain(..)
                .rev()
                .map(|(child, input)| (child, depth + 1, input)),
        );
    }
}

/// Same as [`walk`] without threaded input.
pub fn walk_no_input<'a, F>(root: &'a Formula, mut visitor: F)
where
    F: FnMut(&mut WalkerNode<'a, '_, ()>),
{
    walk(root, (), |(), node| visitor(node))
}
