//! Typing domain: expected-symbol sequences and their generation.

use rand::Rng;

/// One expected input symbol. Space is reserved as a group separator and
/// only ever matches a literal space key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Space,
}

impl Symbol {
    /// Case-insensitive match for characters; Space matches only Space.
    pub fn accepts(&self, typed: Symbol) -> bool {
        match (self, typed) {
            (Symbol::Char(expected), Symbol::Char(got)) => {
                expected.to_lowercase().eq(got.to_lowercase())
            }
            (Symbol::Space, Symbol::Space) => true,
            _ => false,
        }
    }
}

/// Which of the two concurrent sequences a notification refers to.
/// Exactly one of them owns keyboard dispatch at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Movement,
    Battle,
}

/// An ordered list of expected symbols plus the cursor of the next one.
/// `cursor == len` signals completion.
#[derive(Debug, Clone, Default)]
pub struct TypeSequence {
    symbols: Vec<Symbol>,
    cursor: usize,
}

impl TypeSequence {
    /// Movement-style sequence: `groups` groups of four uniform-random
    /// alphabet characters, each group followed by one Space.
    pub fn grouped<R: Rng>(alphabet: &[char], groups: usize, rng: &mut R) -> Self {
        let mut symbols = Vec::with_capacity(groups * 5);
        if alphabet.is_empty() {
            return Self { symbols, cursor: 0 };
        }
        for _ in 0..groups {
            for _ in 0..4 {
                let index = rng.random_range(0..alphabet.len());
                symbols.push(Symbol::Char(alphabet[index]));
            }
            symbols.push(Symbol::Space);
        }
        Self { symbols, cursor: 0 }
    }

    /// Battle-style sequence: `len` characters, no separators.
    pub fn plain<R: Rng>(alphabet: &[char], len: usize, rng: &mut R) -> Self {
        let mut symbols = Vec::with_capacity(len);
        if alphabet.is_empty() {
            return Self { symbols, cursor: 0 };
        }
        for _ in 0..len {
            let index = rng.random_range(0..alphabet.len());
            symbols.push(Symbol::Char(alphabet[index]));
        }
        Self { symbols, cursor: 0 }
    }

    /// The symbol the player must type next, None once complete.
    pub fn expected(&self) -> Option<Symbol> {
        self.symbols.get(self.cursor).copied()
    }

    pub fn advance(&mut self) {
        if self.cursor < self.symbols.len() {
            self.cursor += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.symbols.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
