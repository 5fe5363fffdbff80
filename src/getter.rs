//! Read-only queries.
//!
//! Unregistered addresses read back as empty records unless the owner has
//! switched on `strict_reads`, in which case the single-record getters fail
//! with `NotFound`. Sequence getters never filter soft-deleted entries.

use soroban_sdk::{panic_with_error, Address, Bytes, Env, String, Vec};

use crate::entries::{Collection, Entry};
use crate::identity;
use crate::profile::{Profile, SocialLinks};
use crate::storage;
use crate::RegistryError;

/// Largest page returned by the `list_*` queries.
pub const MAX_PAGE_SIZE: u32 = 50;

fn missing<T>(env: &Env, fallback: impl FnOnce() -> T) -> T {
    if storage::read_config(env).strict_reads {
        panic_with_error!(env, RegistryError::NotFound);
    }
    fallback()
}

pub fn get_profile(env: &Env, address: &Address) -> Profile {
    storage::read_profile(env, address).unwrap_or_else(|| missing(env, || Profile::empty(env)))
}

pub fn get_user_social(env: &Env, address: &Address) -> SocialLinks {
    storage::read_social(env, address)
        .unwrap_or_else(|| missing(env, || SocialLinks::empty(env)))
}

pub fn get_user_introduction(env: &Env, address: &Address) -> String {
    storage::read_introduction(env, address)
        .unwrap_or_else(|| missing(env, || String::from_str(env, "")))
}

pub fn get_user_skills(env: &Env, address: &Address) -> Vec<String> {
    storage::read_skills(env, address)
}

/// Fetch one entry, deleted or not.
///
/// # Panics
/// - `IndexOutOfRange` if `index` is not below the sequence length
pub fn get_entry<T: Entry>(env: &Env, address: &Address, index: u32) -> T {
    storage::read_entry(env, address, index)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::IndexOutOfRange))
}

/// Sequence length, soft-deleted entries included.
pub fn get_count(env: &Env, collection: Collection, address: &Address) -> u32 {
    storage::entry_count(env, collection, address)
}

/// Read up to `limit` entries starting at `start`.
///
/// The page is capped at [`MAX_PAGE_SIZE`]; a `start` past the end yields
/// an empty page.
pub fn list_entries<T: Entry>(env: &Env, address: &Address, start: u32, limit: u32) -> Vec<T> {
    let count = storage::entry_count(env, T::COLLECTION, address);
    let end = start.saturating_add(limit.min(MAX_PAGE_SIZE)).min(count);

    let mut page = Vec::new(env);
    for index in start..end {
        if let Some(entry) = storage::read_entry::<T>(env, address, index) {
            page.push_back(entry);
        }
    }
    page
}

/// Resolve a username to its bound address, if any.
pub fn get_address_for_username(env: &Env, username: &Bytes) -> Option<Address> {
    storage::read_username_owner(env, username)
}

pub fn get_profile_by_username(env: &Env, username: &Bytes) -> Option<Profile> {
    get_address_for_username(env, username).and_then(|owner| storage::read_profile(env, &owner))
}

/// Check if a username is well-formed and bound to nobody.
pub fn is_username_available(env: &Env, username: &Bytes) -> bool {
    identity::validate_username(username) && storage::read_username_owner(env, username).is_none()
}

pub fn get_total_users(env: &Env) -> u64 {
    storage::read_total_users(env)
}
