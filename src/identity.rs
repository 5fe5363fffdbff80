//! Identity helpers shared by every capability group.
//!
//! Usernames are case-sensitive byte strings. No normalization is applied:
//! `JDoe` and `jdoe` are distinct names.
//! - Length: 1-32 bytes
//! - Every byte is printable, non-whitespace ASCII (`!` through `~`)

use soroban_sdk::{Bytes, String};

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: u32 = 1;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: u32 = 32;

/// Validate a username.
///
/// Returns true if the username can be claimed, false otherwise.
pub fn validate_username(username: &Bytes) -> bool {
    let len = username.len();

    if len < MIN_USERNAME_LENGTH || len > MAX_USERNAME_LENGTH {
        return false;
    }

    username.iter().all(is_username_byte)
}

/// Check if a byte is printable ASCII other than space.
#[inline]
fn is_username_byte(b: u8) -> bool {
    (b'!'..=b'~').contains(&b)
}

/// Check if a string field carries no value.
#[inline]
pub fn is_blank(value: &String) -> bool {
    value.len() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_valid_usernames() {
        let env = Env::default();

        assert!(validate_username(&Bytes::from_slice(&env, b"J")));
        assert!(validate_username(&Bytes::from_slice(&env, b"JDoe")));
        assert!(validate_username(&Bytes::from_slice(&env, b"JDoe001")));
        assert!(validate_username(&Bytes::from_slice(&env, b"john.doe_99")));
        assert!(validate_username(&Bytes::from_slice(
            &env,
            b"abcdefghijklmnopqrstuvwxyz012345"
        ))); // 32 bytes max
    }

    #[test]
    fn test_invalid_usernames() {
        let env = Env::default();

        // Empty
        assert!(!validate_username(&Bytes::new(&env)));

        // Too long
        assert!(!validate_username(&Bytes::from_slice(
            &env,
            b"abcdefghijklmnopqrstuvwxyz0123456"
        ))); // 33 bytes

        // Whitespace and control bytes
        assert!(!validate_username(&Bytes::from_slice(&env, b"John Doe")));
        assert!(!validate_username(&Bytes::from_slice(&env, b"JDoe\n")));
        assert!(!validate_username(&Bytes::from_slice(&env, b"\tJDoe")));

        // Non-ASCII
        assert!(!validate_username(&Bytes::from_slice(&env, &[0x4a, 0xc3, 0xa9])));
    }

    #[test]
    fn test_is_blank() {
        let env = Env::default();

        assert!(is_blank(&String::from_str(&env, "")));
        assert!(!is_blank(&String::from_str(&env, "Boston, MA")));
    }
}
