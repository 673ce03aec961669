//! Identifier token generation
//!
//! Tokens are short and random, so on their own they are only
//! probabilistically unique. The registry retries generation until the token
//! is absent from its key set.

use rand::{distributions::Alphanumeric, Rng};

/// Length of generated tool identifiers
pub const TOKEN_LEN: usize = 5;

/// Generate one candidate identifier token
pub fn next_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        assert_eq!(next_token().len(), TOKEN_LEN);
    }

    #[test]
    fn test_token_charset() {
        assert!(next_token().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
