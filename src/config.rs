//! Registry-wide settings chosen by the owner.

use soroban_sdk::contracttype;

/// What happens to a username binding when its owner switches to a new name.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UsernamePolicy {
    /// The old name stays bound to the previous owner and remains unavailable.
    Retain,
    /// The old name is unbound and becomes claimable by anyone.
    ///
    /// Only the name being switched away from is released. Names left behind
    /// while `Retain` was in force stay bound to their owner.
    Release,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub username_policy: UsernamePolicy,

    /// Fail reads of never-registered addresses with `NotFound` instead of
    /// returning empty records.
    pub strict_reads: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            username_policy: UsernamePolicy::Retain,
            strict_reads: false,
        }
    }
}
