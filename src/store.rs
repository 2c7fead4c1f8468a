//! In-memory card storage
//!
//! [`CardStore`] is an append-only, insertion-ordered list of [`Card`]s.
//! Cards are addressed by position; duplicates are allowed and nothing is
//! ever removed, so `len()` only grows.

/// One question/answer pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Card {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Sample cards loaded at startup
pub const SAMPLE_CARDS: [(&str, &str); 2] = [
    ("What is the capital of France?", "Paris"),
    ("What is 2 + 2?", "4"),
];

/// Append-only collection of cards
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        CardStore { cards: Vec::new() }
    }

    /// Create a store pre-seeded with [`SAMPLE_CARDS`]
    pub fn with_samples() -> Self {
        let mut store = CardStore::new();
        for (question, answer) in SAMPLE_CARDS {
            store.append(question, answer);
        }
        store
    }

    /// Add a card at the end. No validation is performed.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.cards.push(Card::new(question, answer));
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Question text at `index`, or `None` when out of range
    pub fn question(&self, index: usize) -> Option<&str> {
        self.card(index).map(|card| card.question.as_str())
    }

    /// Answer text at `index`, or `None` when out of range
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.card(index).map(|card| card.answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_lookup() {
        let mut store = CardStore::new();
        assert!(store.is_empty());

        store.append("Q1", "A1");
        store.append("Q2", "A2");

        assert_eq!(store.len(), 2);
        assert_eq!(store.question(0), Some("Q1"));
        assert_eq!(store.answer(1), Some("A2"));
        assert_eq!(store.question(2), None);
        assert_eq!(store.answer(usize::MAX), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut store = CardStore::new();
        store.append("same", "same");
        store.append("same", "same");

        assert_eq!(store.len(), 2);
        assert_eq!(store.card(0), store.card(1));
    }

    #[test]
    fn test_with_samples() {
        let store = CardStore::with_samples();
        assert_eq!(store.len(), 2);
        assert_eq!(store.question(0), Some("What is the capital of France?"));
        assert_eq!(store.answer(0), Some("Paris"));
        assert_eq!(store.answer(1), Some("4"));
    }
}
