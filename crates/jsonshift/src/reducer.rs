//! The table-free shift/reduce engine.
//!
//! There is no precompiled parse table. Every step re-scans the whole rule
//! set against the stack and picks the best candidate:
//!
//! - for each rule, the highest stack position whose tags match the rule's
//!   right-hand side, truncated to however many tokens sit above it;
//! - a longer right-hand side beats a shorter one wherever it matched;
//! - among equal lengths, the match closer to the top wins, and declaration
//!   order decides what is left.
//!
//! A full match is reduced in place and the scan starts over. A partial match
//! means the rule may still complete once more input arrives, so the stack
//! is left alone. Each step costs `O(rules * depth)`, which the small fixed
//! grammar keeps cheap.

use tracing::trace;

use crate::{
    Tag, Token,
    grammar::{RULES, Rule},
};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    rule: &'static Rule,
    at: usize,
    full: bool,
}

/// Owns the parse stack and collapses it with a rule table.
#[derive(Debug, Clone)]
pub struct Reducer {
    rules: &'static [Rule],
    stack: Vec<Token>,
    last_reduction: Option<usize>,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer {
    /// A reducer over the JSON grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(&RULES)
    }

    /// A reducer over another rule table. Every rule needs a non-empty
    /// right-hand side.
    #[must_use]
    pub(crate) fn with_rules(rules: &'static [Rule]) -> Self {
        Self {
            rules,
            stack: Vec::with_capacity(16),
            last_reduction: None,
        }
    }

    /// Appends `token` unchanged. Does not reduce.
    pub fn push(&mut self, token: Token) {
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            token.tag != Tag::Space,
            "Internal error: whitespace shifted onto the parse stack"
        );
        trace!(%token, "shift");
        self.stack.push(token);
    }

    /// Empties the stack and forgets the last reduction.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.last_reduction = None;
    }

    /// The current stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[Token] {
        &self.stack
    }

    /// Stack index of the most recent reduction, if any happened since the
    /// last [`clear`](Self::clear).
    #[must_use]
    pub fn last_reduction(&self) -> Option<usize> {
        self.last_reduction
    }

    /// `true` when the stack is exactly one [`Tag::Document`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self.stack.as_slice(), [token] if token.tag == Tag::Document)
    }

    /// Reduces until no full match remains.
    ///
    /// Returns `false` when the very first step finds no rule matching any
    /// suffix of a non-empty stack; the stack is then in a shape no further
    /// input can repair. Once a step has matched, running out of rules later
    /// ends the loop normally.
    pub fn reduce_to_fixed_point(&mut self) -> bool {
        let mut matched = self.stack.is_empty();
        while let Some(candidate) = self.best_candidate() {
            matched = true;
            if !candidate.full {
                break;
            }
            self.reduce(candidate);
        }
        matched
    }

    /// The slice of the stack a structural diagnostic shows.
    ///
    /// Anchored at the last reduction, or at the top when nothing was
    /// reduced yet; the window reaches `width - 1` tokens below the anchor
    /// when that many exist and spans at most `width` tokens.
    #[must_use]
    pub fn context(&self, width: usize) -> &[Token] {
        let Some(anchor) = self
            .last_reduction
            .or_else(|| self.stack.len().checked_sub(1))
        else {
            return &[];
        };
        let back = width.saturating_sub(1);
        let from = if anchor >= back { anchor - back } else { anchor };
        let to = self.stack.len().min(from.saturating_add(width));
        self.stack.get(from..to).unwrap_or(&[])
    }

    fn matches_at(&self, rule: &Rule, at: usize) -> bool {
        rule.rhs
            .iter()
            .zip(&self.stack[at..])
            .all(|(tag, token)| *tag == token.tag)
    }

    fn best_candidate(&self) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for rule in self.rules {
            if best.is_some_and(|best| rule.rhs.len() < best.rule.rhs.len()) {
                continue;
            }
            let Some(at) = (0..self.stack.len())
                .rev()
                .find(|&at| self.matches_at(rule, at))
            else {
                continue;
            };
            let wins = match best {
                None => true,
                Some(best) => rule.rhs.len() > best.rule.rhs.len() || at > best.at,
            };
            if wins {
                best = Some(Candidate {
                    rule,
                    at,
                    full: rule.rhs.len() <= self.stack.len() - at,
                });
            }
        }
        best
    }

    fn reduce(&mut self, candidate: Candidate) {
        let Candidate { rule, at, .. } = candidate;
        let absorbed: String = self
            .stack
            .drain(at + 1..at + rule.rhs.len())
            .map(|token| token.text)
            .collect();
        let head = &mut self.stack[at];
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            rule.rhs.first() == Some(&head.tag),
            "Internal error: reduced {rule} over a mismatched stack"
        );
        head.tag = rule.result;
        head.text.push_str(&absorbed);
        self.last_reduction = Some(at);
        trace!(%rule, at, depth = self.stack.len(), "reduce");
    }
}
