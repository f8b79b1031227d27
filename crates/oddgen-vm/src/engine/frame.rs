//! Invocation frames for the explicit call stack.
//!
//! Each frame is one running recognizer: which alternative it is on, which
//! symbol of that alternative comes next, and what the alternative has
//! collected so far. Nesting lives on the heap, so the recursion limit is
//! the only bound on depth.

use oddgen_compiler::{Recognizer, Symbol};

use super::value::{Match, Node};

#[derive(Debug)]
pub(crate) struct Frame<'g> {
    pub(crate) recognizer: &'g Recognizer,
    /// Token offset the recognizer was invoked at.
    pub(crate) start: usize,
    pub(crate) alternative: usize,
    pub(crate) symbol: usize,
    pub(crate) cursor: usize,
    pub(crate) nodes: Vec<Node>,
}

impl<'g> Frame<'g> {
    pub(crate) fn new(recognizer: &'g Recognizer, start: usize) -> Self {
        Self {
            recognizer,
            start,
            alternative: 0,
            symbol: 0,
            cursor: start,
            nodes: Vec::new(),
        }
    }

    pub(crate) fn rule(&self) -> &'g str {
        self.recognizer.name()
    }

    /// Symbols of the current alternative, `None` once all are exhausted.
    pub(crate) fn symbols(&self) -> Option<&'g [Symbol]> {
        self.recognizer
            .alternatives()
            .get(self.alternative)
            .map(Vec::as_slice)
    }

    pub(crate) fn current(&self) -> Option<&'g Symbol> {
        self.symbols()?.get(self.symbol)
    }

    /// Drop the current alternative's progress and move to the next one.
    pub(crate) fn next_alternative(&mut self) {
        self.alternative += 1;
        self.symbol = 0;
        self.cursor = self.start;
        self.nodes.clear();
    }

    /// Accept the current symbol, which covered `width` tokens.
    pub(crate) fn accept(&mut self, nodes: impl IntoIterator<Item = Node>, width: usize) {
        self.nodes.extend(nodes);
        self.cursor += width;
        self.symbol += 1;
    }

    pub(crate) fn finish(&mut self) -> Match {
        Match::Matched {
            width: self.cursor - self.start,
            nodes: std::mem::take(&mut self.nodes),
        }
    }
}
