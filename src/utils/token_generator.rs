//! Short token generation.
//!
//! Tokens are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (`a-z`, `A-Z`, `0-9`) using the process-wide thread-local generator,
//! which is seeded once from the OS rather than reseeded per call.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated tokens.
pub const TOKEN_LENGTH: usize = 6;

/// Generates a random 6-character alphanumeric token.
///
/// Uniqueness is not guaranteed here; the store reports a conflict on
/// collision and [`crate::application::services::ShortenService`] retries
/// with a fresh token.
///
/// # Examples
///
/// ```
/// use snaplink::utils::token_generator::{generate_token, TOKEN_LENGTH};
///
/// let token = generate_token();
/// assert_eq!(token.len(), TOKEN_LENGTH);
/// assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_has_correct_length() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_generate_token_alphanumeric_only() {
        for _ in 0..100 {
            let token = generate_token();
            assert!(
                token.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in token '{}'",
                token
            );
        }
    }

    #[test]
    fn test_generate_token_covers_full_alphabet() {
        let mut seen: HashSet<char> = HashSet::new();

        for _ in 0..5000 {
            seen.extend(generate_token().chars());
        }

        // 62 symbols; 30k samples make missing one astronomically unlikely.
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_generate_token_produces_distinct_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            tokens.insert(generate_token());
        }

        assert_eq!(tokens.len(), 1000);
    }
}
