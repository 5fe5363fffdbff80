//! Event emission helpers for the registry contract.

use soroban_sdk::{Address, Bytes, Env, Symbol};

use crate::config::RegistryConfig;
use crate::entries::Collection;

/// Emit an event when an address completes first registration.
pub fn emit_profile_created(env: &Env, address: &Address, username: &Bytes, total: u64) {
    let topics = (Symbol::new(env, "profile_created"),);
    env.events().publish(topics, (address.clone(), username.clone(), total));
}

/// Emit an event when an existing profile is rewritten.
pub fn emit_profile_updated(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "profile_updated"),);
    env.events().publish(topics, address.clone());
}

/// Emit an event when a username is bound to an address.
pub fn emit_username_claimed(env: &Env, username: &Bytes, address: &Address) {
    let topics = (Symbol::new(env, "username_claimed"),);
    env.events().publish(topics, (username.clone(), address.clone()));
}

/// Emit an event when a previous username binding is dropped.
pub fn emit_username_released(env: &Env, username: &Bytes, address: &Address) {
    let topics = (Symbol::new(env, "username_released"),);
    env.events().publish(topics, (username.clone(), address.clone()));
}

pub fn emit_social_updated(env: &Env, address: &Address, links_set: u32) {
    let topics = (Symbol::new(env, "social_updated"),);
    env.events().publish(topics, (address.clone(), links_set));
}

pub fn emit_introduction_updated(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "intro_updated"),);
    env.events().publish(topics, address.clone());
}

pub fn emit_skills_updated(env: &Env, address: &Address, count: u32) {
    let topics = (Symbol::new(env, "skills_updated"),);
    env.events().publish(topics, (address.clone(), count));
}

/// Emit an event when an entry is appended to a sub-collection.
pub fn emit_entry_added(env: &Env, collection: Collection, address: &Address, index: u32) {
    let topics = (Symbol::new(env, "entry_added"),);
    env.events().publish(topics, (collection, address.clone(), index));
}

/// Emit an event when an entry is flagged as deleted.
pub fn emit_entry_deleted(env: &Env, collection: Collection, address: &Address, index: u32) {
    let topics = (Symbol::new(env, "entry_deleted"),);
    env.events().publish(topics, (collection, address.clone(), index));
}

/// Emit an event when the registry owner changes.
pub fn emit_owner_changed(env: &Env, from: &Address, to: &Address) {
    let topics = (Symbol::new(env, "owner_changed"),);
    env.events().publish(topics, (from.clone(), to.clone()));
}

pub fn emit_whitelist_added(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "whitelist_added"),);
    env.events().publish(topics, address.clone());
}

pub fn emit_whitelist_removed(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "whitelist_removed"),);
    env.events().publish(topics, address.clone());
}

pub fn emit_config_updated(env: &Env, config: &RegistryConfig) {
    let topics = (Symbol::new(env, "config_updated"),);
    env.events().publish(topics, config.clone());
}
