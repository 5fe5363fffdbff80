//! Create and update operations.
//!
//! Every function here writes only to the records of `caller`, whose
//! signature the host has already checked via `require_auth`.

use soroban_sdk::{log, panic_with_error, Address, Bytes, Env, String, Vec};

use crate::config::{RegistryConfig, UsernamePolicy};
use crate::entries::{Education, Entry, Project, Publication, WorkExperience};
use crate::events::*;
use crate::identity;
use crate::profile::{Profile, SocialLinks};
use crate::storage;
use crate::RegistryError;

/// Personal details accepted by [`create_or_update_profile`].
pub struct ProfileInput {
    pub full_name: String,
    pub user_name: Bytes,
    pub image_url: String,
    pub email: String,
    pub location: String,
    pub description: String,
}

/// Create the caller's profile, or rewrite it if one exists.
///
/// The whitelist is consulted only for the first call of an address. Later
/// calls from the same address are updates and are not re-checked, so
/// removing an address from the whitelist never locks it out of its own
/// profile.
///
/// # Panics
/// - `NotInitialized` if the registry has no owner yet
/// - `NotAuthorized` if this is a first registration from a non-whitelisted address
/// - `InvalidUsername` if the username is malformed
/// - `UsernameTaken` if the username is bound to another address
pub fn create_or_update_profile(env: &Env, caller: &Address, input: ProfileInput) {
    if storage::read_owner(env).is_none() {
        panic_with_error!(env, RegistryError::NotInitialized);
    }

    let existing = storage::read_profile(env, caller);

    if existing.is_none() && !storage::is_whitelisted(env, caller) {
        panic_with_error!(env, RegistryError::NotAuthorized);
    }

    if !identity::validate_username(&input.user_name) {
        panic_with_error!(env, RegistryError::InvalidUsername);
    }

    if let Some(holder) = storage::read_username_owner(env, &input.user_name) {
        if holder != *caller {
            panic_with_error!(env, RegistryError::UsernameTaken);
        }
    }

    let now = env.ledger().sequence() as u64;
    let created_at = match &existing {
        Some(previous) => {
            if previous.user_name != input.user_name {
                release_previous_username(env, caller, &previous.user_name);
            }
            previous.created_at
        }
        None => now,
    };

    let profile = Profile {
        full_name: input.full_name,
        user_name: input.user_name,
        image_url: input.image_url,
        email: input.email,
        location: input.location,
        description: input.description,
        created_at,
        updated_at: now,
    };

    storage::write_username_owner(env, &profile.user_name, caller);
    storage::write_profile(env, caller, &profile);
    emit_username_claimed(env, &profile.user_name, caller);

    if existing.is_some() {
        emit_profile_updated(env, caller);
        return;
    }

    let total = storage::read_total_users(env) + 1;
    storage::write_total_users(env, total);
    log!(env, "first registration", caller.clone(), total);
    emit_profile_created(env, caller, &profile.user_name, total);
}

fn release_previous_username(env: &Env, caller: &Address, previous: &Bytes) {
    match storage::read_config(env).username_policy {
        UsernamePolicy::Retain => {}
        UsernamePolicy::Release => {
            // Only drop the binding if it still points at the caller.
            if storage::read_username_owner(env, previous).as_ref() == Some(caller) {
                storage::remove_username(env, previous);
                emit_username_released(env, previous, caller);
            }
        }
    }
}

/// Overwrite the caller's social links wholesale.
pub fn create_user_social(env: &Env, caller: &Address, social: SocialLinks) {
    storage::write_social(env, caller, &social);
    emit_social_updated(env, caller, social.set_count());
}

/// Overwrite the caller's introduction.
pub fn create_user_introduction(env: &Env, caller: &Address, introduction: String) {
    storage::write_introduction(env, caller, &introduction);
    emit_introduction_updated(env, caller);
}

/// Replace the caller's skill list with `skills`, keeping its order.
pub fn create_user_skill(env: &Env, caller: &Address, skills: Vec<String>) {
    storage::write_skills(env, caller, &skills);
    emit_skills_updated(env, caller, skills.len());
}

/// Append an entry to the caller's sequence and return its index.
fn append<T: Entry>(env: &Env, caller: &Address, entry: T) -> u32 {
    let index = storage::push_entry(env, caller, &entry);
    emit_entry_added(env, T::COLLECTION, caller, index);
    index
}

pub fn create_project(env: &Env, caller: &Address, project: Project) -> u32 {
    append(env, caller, project)
}

pub fn create_work_experience(env: &Env, caller: &Address, work: WorkExperience) -> u32 {
    append(env, caller, work)
}

pub fn create_education(env: &Env, caller: &Address, education: Education) -> u32 {
    append(env, caller, education)
}

pub fn create_publication(env: &Env, caller: &Address, publication: Publication) -> u32 {
    append(env, caller, publication)
}

// ========== Owner administration ==========

/// Panic unless `caller` is the current registry owner.
pub fn require_owner(env: &Env, caller: &Address) -> Address {
    let owner = storage::read_owner(env)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

    if *caller != owner {
        panic_with_error!(env, RegistryError::NotAuthorized);
    }

    owner
}

/// Hand the owner role to `new_owner`. The caller loses it in the same call.
pub fn set_owner(env: &Env, caller: &Address, new_owner: &Address) {
    let previous = require_owner(env, caller);

    storage::write_owner(env, new_owner);
    log!(env, "owner transferred", previous.clone(), new_owner.clone());
    emit_owner_changed(env, &previous, new_owner);
}

pub fn add_to_whitelist(env: &Env, caller: &Address, address: &Address) {
    require_owner(env, caller);

    storage::write_whitelisted(env, address, true);
    emit_whitelist_added(env, address);
}

/// Revoke first-registration rights. Already registered profiles are unaffected.
pub fn remove_from_whitelist(env: &Env, caller: &Address, address: &Address) {
    require_owner(env, caller);

    storage::write_whitelisted(env, address, false);
    emit_whitelist_removed(env, address);
}

pub fn set_config(env: &Env, caller: &Address, config: &RegistryConfig) {
    require_owner(env, caller);

    storage::write_config(env, config);
    emit_config_updated(env, config);
}
