//! Incremental construction of a [`Dfa`].

use std::fmt;

use super::{CharMatcher, Dfa, State, StateId, Transition};

/// Problem found while building an automaton.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DfaBuildError {
    /// A transition, accept mark or start referred to a state never added.
    UnknownState(StateId),
    /// `on_range` with `hi < lo`.
    InvertedRange { lo: char, hi: char },
    /// `on_set` with no characters.
    EmptySet { from: StateId },
}

impl fmt::Display for DfaBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DfaBuildError::UnknownState(id) => write!(f, "unknown state {}", id.index()),
            DfaBuildError::InvertedRange { lo, hi } => {
                write!(f, "inverted range {lo:?}..={hi:?}")
            }
            DfaBuildError::EmptySet { from } => {
                write!(f, "empty character set on state {}", from.index())
            }
        }
    }
}

impl std::error::Error for DfaBuildError {}

/// Builder for [`Dfa`].
///
/// Mutating calls never panic: misuse is recorded and the first recorded
/// problem is returned by [`build`](Self::build).
#[derive(Debug)]
pub struct DfaBuilder<T> {
    states: Vec<State<T>>,
    errors: Vec<DfaBuildError>,
}

impl<T> Default for DfaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DfaBuilder<T> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Add a fresh, non-accepting state with no transitions.
    pub fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State {
            id,
            accept: None,
            transitions: Vec::new(),
        });
        id
    }

    /// Mark `state` as accepting with `tag` (replacing any earlier tag).
    pub fn accept(&mut self, state: StateId, tag: T) -> &mut Self {
        if let Some(s) = self.states.get_mut(state.index()) {
            s.accept = Some(tag);
        } else {
            self.errors.push(DfaBuildError::UnknownState(state));
        }
        self
    }

    pub fn on_char(&mut self, from: StateId, c: char, to: StateId) -> &mut Self {
        self.push(from, CharMatcher::Char(c), to)
    }

    pub fn on_range(&mut self, from: StateId, lo: char, hi: char, to: StateId) -> &mut Self {
        if hi < lo {
            self.errors.push(DfaBuildError::InvertedRange { lo, hi });
            return self;
        }
        self.push(from, CharMatcher::Range(lo, hi), to)
    }

    pub fn on_set(
        &mut self,
        from: StateId,
        chars: impl IntoIterator<Item = char>,
        to: StateId,
    ) -> &mut Self {
        let mut set: Vec<char> = chars.into_iter().collect();
        if set.is_empty() {
            self.errors.push(DfaBuildError::EmptySet { from });
            return self;
        }
        set.sort_unstable();
        set.dedup();
        self.push(from, CharMatcher::Set(set.into_boxed_slice()), to)
    }

    /// Finish the automaton with `start` as its initial state.
    pub fn build(self, start: StateId) -> Result<Dfa<T>, DfaBuildError> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }
        if start.index() >= self.states.len() {
            return Err(DfaBuildError::UnknownState(start));
        }
        Ok(Dfa {
            states: self.states,
            start,
        })
    }

    fn push(&mut self, from: StateId, matcher: CharMatcher, to: StateId) -> &mut Self {
        if to.index() >= self.states.len() {
            self.errors.push(DfaBuildError::UnknownState(to));
            return self;
        }
        match self.states.get_mut(from.index()) {
            Some(state) => state.transitions.push(Transition {
                matcher,
                target: to,
            }),
            None => self.errors.push(DfaBuildError::UnknownState(from)),
        }
        self
    }
}
