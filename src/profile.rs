//! Per-address profile records.

use soroban_sdk::{contracttype, Bytes, Env, String};

/// Personal details owned by one address.
///
/// A never-registered address reads back as [`Profile::empty`], which is
/// told apart from a real profile by its empty `user_name`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Display name.
    pub full_name: String,

    /// Unique, case-sensitive username. Empty only for unregistered addresses.
    pub user_name: Bytes,

    /// Avatar image URL.
    pub image_url: String,

    pub email: String,

    pub location: String,

    /// Short headline or bio.
    pub description: String,

    /// Ledger sequence of the first registration.
    pub created_at: u64,

    /// Ledger sequence of the latest update.
    pub updated_at: u64,
}

impl Profile {
    /// The record returned for addresses that never registered.
    pub fn empty(env: &Env) -> Self {
        let blank = String::from_str(env, "");
        Self {
            full_name: blank.clone(),
            user_name: Bytes::new(env),
            image_url: blank.clone(),
            email: blank.clone(),
            location: blank.clone(),
            description: blank,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Check if this record belongs to a registered address.
    pub fn is_registered(&self) -> bool {
        !self.user_name.is_empty()
    }
}

/// Social links for one address.
///
/// Every field is a URL or the empty string for "not set".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SocialLinks {
    pub website: String,
    pub twitter: String,
    pub facebook: String,
    pub github: String,
    pub dribbble: String,
    pub linkedin: String,
    pub behance: String,
    pub medium: String,
}

impl SocialLinks {
    /// All links unset.
    pub fn empty(env: &Env) -> Self {
        let blank = String::from_str(env, "");
        Self {
            website: blank.clone(),
            twitter: blank.clone(),
            facebook: blank.clone(),
            github: blank.clone(),
            dribbble: blank.clone(),
            linkedin: blank.clone(),
            behance: blank.clone(),
            medium: blank,
        }
    }

    /// Number of links that carry a value.
    pub fn set_count(&self) -> u32 {
        [
            &self.website,
            &self.twitter,
            &self.facebook,
            &self.github,
            &self.dribbble,
            &self.linkedin,
            &self.behance,
            &self.medium,
        ]
        .iter()
        .filter(|link| !crate::identity::is_blank(link))
        .count() as u32
    }
}
