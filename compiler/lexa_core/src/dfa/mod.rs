//! Generic maximal-munch automaton.
//!
//! A [`Dfa<T>`] is a table of [`State`]s, each with an ordered list of
//! [`Transition`]s and an optional accept tag of type `T`. Running it over a
//! [`CharCursor`] follows transitions until none applies and reports the
//! *longest* prefix that ended in an accepting state, together with that
//! state's tag.
//!
//! Determinism is by construction order: when several transitions of one
//! state could match a character, the first one added wins.
//!
//! ```text
//! let mut b = DfaBuilder::new();
//! let start = b.add_state();
//! let int = b.add_state();
//! b.on_range(start, '0', '9', int).on_range(int, '0', '9', int).accept(int, Tag::Int);
//! let dfa = b.build(start)?;
//! dfa.evaluate(&CharCursor::new("42x"))  // Some(DfaMatch { len: 2, tag: Tag::Int })
//! ```
//!
//! Zero-length matches are never reported, even when the start state
//! accepts: a match always covers at least one character.

mod builder;

pub use builder::{DfaBuildError, DfaBuilder};

use crate::CharCursor;

/// Index of a state inside its automaton.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The character test guarding a transition.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CharMatcher {
    /// Exactly this character.
    Char(char),
    /// Any character in `lo..=hi`.
    Range(char, char),
    /// Any character of a sorted, de-duplicated set.
    Set(Box<[char]>),
}

impl CharMatcher {
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharMatcher::Char(expected) => c == *expected,
            CharMatcher::Range(lo, hi) => (*lo..=*hi).contains(&c),
            CharMatcher::Set(chars) => chars.binary_search(&c).is_ok(),
        }
    }
}

/// An edge `matcher -> target`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Transition {
    pub matcher: CharMatcher,
    pub target: StateId,
}

/// One automaton state.
#[derive(Clone, Debug)]
pub struct State<T> {
    id: StateId,
    accept: Option<T>,
    transitions: Vec<Transition>,
}

impl<T> State<T> {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_accepting(&self) -> bool {
        self.accept.is_some()
    }

    pub fn accept_tag(&self) -> Option<&T> {
        self.accept.as_ref()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// First transition whose matcher accepts `c`.
    #[inline]
    fn step(&self, c: char) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.matcher.matches(c))
            .map(|t| t.target)
    }
}

/// Result of a successful [`Dfa::evaluate`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DfaMatch<T> {
    /// Matched length in characters (always `>= 1`).
    pub len: usize,
    /// Accept tag of the state where the longest match ended.
    pub tag: T,
}

/// Immutable automaton produced by [`DfaBuilder::build`].
#[derive(Clone, Debug)]
pub struct Dfa<T> {
    states: Vec<State<T>>,
    start: StateId,
}

impl<T> Dfa<T> {
    pub fn states(&self) -> &[State<T>] {
        &self.states
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    fn state(&self, id: StateId) -> &State<T> {
        // Every StateId stored in a built Dfa was validated by the builder.
        &self.states[id.index()]
    }
}

impl<T: Copy> Dfa<T> {
    /// Longest accepted prefix of the unread text, without consuming.
    pub fn evaluate(&self, cursor: &CharCursor<'_>) -> Option<DfaMatch<T>> {
        let mut state = self.state(self.start);
        let mut last_accept = None;
        for (offset, c) in cursor.rest().chars().enumerate() {
            let Some(next) = state.step(c) else {
                break;
            };
            state = self.state(next);
            if let Some(tag) = state.accept {
                last_accept = Some(DfaMatch {
                    len: offset + 1,
                    tag,
                });
            }
        }
        last_accept
    }
}
