//! Ledger-resident state of the registry.
//!
//! This module is the only place that touches `env.storage()`. It exposes
//! raw read/write primitives and performs no validation; the insert, getter
//! and delete groups all go through it so they observe the same state.

use soroban_sdk::{contracttype, Address, Bytes, Env, IntoVal, String, Val, Vec};

use crate::config::RegistryConfig;
use crate::entries::{Collection, Entry};
use crate::profile::{Profile, SocialLinks};

/// Storage keys for the registry contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Registry owner address.
    Owner,

    /// Owner-managed settings.
    Config,

    /// Number of addresses that completed first registration.
    TotalUsers,

    /// Addresses allowed to perform first registration.
    Whitelisted(Address),

    /// Maps Address to Profile.
    Profile(Address),

    /// Maps username to owner Address.
    Username(Bytes),

    Social(Address),

    Introduction(Address),

    /// Ordered skill list, replaced wholesale on write.
    Skills(Address),

    /// Length of an address's sequence of the given kind.
    EntryCount(Collection, Address),

    /// Entry at a fixed index of an address's sequence.
    Entry(Collection, Address, u32),
}

/// Time-to-live for profile data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

fn persist<V: IntoVal<Env, Val>>(env: &Env, key: &RegistryKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

// ========== Registry singletons ==========

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&RegistryKey::Owner, owner);
}

pub fn read_config(env: &Env) -> RegistryConfig {
    env.storage()
        .instance()
        .get(&RegistryKey::Config)
        .unwrap_or_default()
}

pub fn write_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&RegistryKey::Config, config);
}

pub fn read_total_users(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::TotalUsers)
        .unwrap_or(0)
}

pub fn write_total_users(env: &Env, total: u64) {
    env.storage().instance().set(&RegistryKey::TotalUsers, &total);
}

// ========== Whitelist ==========

pub fn is_whitelisted(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&RegistryKey::Whitelisted(address.clone()))
        .unwrap_or(false)
}

pub fn write_whitelisted(env: &Env, address: &Address, allowed: bool) {
    let key = RegistryKey::Whitelisted(address.clone());
    if allowed {
        persist(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ========== Profile and username index ==========

pub fn read_profile(env: &Env, owner: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Profile(owner.clone()))
}

pub fn write_profile(env: &Env, owner: &Address, profile: &Profile) {
    persist(env, &RegistryKey::Profile(owner.clone()), profile);
}

pub fn read_username_owner(env: &Env, username: &Bytes) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Username(username.clone()))
}

pub fn write_username_owner(env: &Env, username: &Bytes, owner: &Address) {
    persist(env, &RegistryKey::Username(username.clone()), owner);
}

pub fn remove_username(env: &Env, username: &Bytes) {
    env.storage()
        .persistent()
        .remove(&RegistryKey::Username(username.clone()));
}

// ========== Single-valued records ==========

pub fn read_social(env: &Env, owner: &Address) -> Option<SocialLinks> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Social(owner.clone()))
}

pub fn write_social(env: &Env, owner: &Address, social: &SocialLinks) {
    persist(env, &RegistryKey::Social(owner.clone()), social);
}

pub fn read_introduction(env: &Env, owner: &Address) -> Option<String> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Introduction(owner.clone()))
}

pub fn write_introduction(env: &Env, owner: &Address, introduction: &String) {
    persist(env, &RegistryKey::Introduction(owner.clone()), introduction);
}

pub fn read_skills(env: &Env, owner: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Skills(owner.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn write_skills(env: &Env, owner: &Address, skills: &Vec<String>) {
    persist(env, &RegistryKey::Skills(owner.clone()), skills);
}

// ========== Indexed sequences ==========

pub fn entry_count(env: &Env, collection: Collection, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&RegistryKey::EntryCount(collection, owner.clone()))
        .unwrap_or(0)
}

pub fn read_entry<T: Entry>(env: &Env, owner: &Address, index: u32) -> Option<T> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Entry(T::COLLECTION, owner.clone(), index))
}

pub fn write_entry<T: Entry>(env: &Env, owner: &Address, index: u32, entry: &T) {
    persist(env, &RegistryKey::Entry(T::COLLECTION, owner.clone(), index), entry);
}

/// Append an entry and return its permanent index.
pub fn push_entry<T: Entry>(env: &Env, owner: &Address, entry: &T) -> u32 {
    let index = entry_count(env, T::COLLECTION, owner);
    write_entry(env, owner, index, entry);
    persist(env, &RegistryKey::EntryCount(T::COLLECTION, owner.clone()), &(index + 1));
    index
}
