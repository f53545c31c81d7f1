//! Time-derived ID minting.

use chrono::Utc;

/// Mints decimal tokens from the wall clock (milliseconds since the Unix
/// epoch), bumped so every token is strictly greater than the previous one.
#[derive(Debug, Default, Clone)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Next token. Never repeats within one sequence, even when called
    /// several times in the same millisecond or if the clock steps back.
    pub fn next_token(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let next = now.max(self.last.saturating_add(1));
        self.last = next;
        next.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tokens_are_unique_and_increasing() {
        let mut seq = IdSequence::new();
        let tokens: Vec<i64> = (0..1000)
            .map(|_| seq.next_token().parse().unwrap())
            .collect();
        assert!(tokens.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tokens.iter().collect::<HashSet<_>>().len(), 1000);
    }

    #[test]
    fn test_tokens_track_the_clock() {
        let mut seq = IdSequence::new();
        let token: i64 = seq.next_token().parse().unwrap();
        assert!(token >= Utc::now().timestamp_millis() - 60_000);
    }
}
