//! # Soroban Resume Registry
//!
//! Public, address-keyed profile registry for the Soroban blockchain.
//!
//! Every address owns one profile made of personal details, social links,
//! an introduction, a skill list and four append-only sub-collections
//! (projects, work experience, education, publications). Features include:
//!
//! - Unique, case-sensitive usernames with reverse lookup
//! - Soft delete for sub-collection entries with stable indices
//! - A whitelist gating first-time registration
//! - A single registry owner managing the whitelist and settings
//!
//! All profile content is public.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Owner lets an address register
//! client.add_to_whitelist(&user, &owner);
//!
//! // User creates a profile and adds history
//! client.create_or_update_profile(&full_name, &user_name, &image_url, &email,
//!     &location, &description, &user);
//! let index = client.create_project(&name, &short_description, &description,
//!     &url, &false, &user);
//!
//! // Anyone reads it back
//! let project = client.get_project(&user, &index);
//! let owner = client.get_address_for_username(&user_name);
//! ```

#![no_std]

mod config;
mod delete;
mod entries;
mod events;
mod getter;
mod identity;
mod insert;
mod profile;
mod storage;


pub use config::{RegistryConfig, UsernamePolicy};
pub use entries::{Collection, Education, Project, Publication, WorkExperience};
pub use getter::MAX_PAGE_SIZE;
pub use identity::{validate_username, MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};
pub use profile::{Profile, SocialLinks};
pub use storage::RegistryKey;

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Bytes, BytesN, Env, String,
    Vec,
};

use crate::insert::ProfileInput;

/// Error codes for the registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not the owner, or is not whitelisted for first registration.
    NotAuthorized = 3,
    /// Username is bound to another address.
    UsernameTaken = 4,
    /// Sub-collection index is past the end of the sequence.
    IndexOutOfRange = 5,
    /// Username format is invalid.
    InvalidUsername = 6,
    /// Address never registered and strict reads are enabled.
    NotFound = 7,
}

#[contract]
pub struct ResumeRegistryContract;

#[contractimpl]
impl ResumeRegistryContract {
    // ========== Initialization ==========

    /// Initialize the registry with its owner.
    ///
    /// The whitelist starts empty and the default [`RegistryConfig`] applies.
    pub fn init(env: Env, owner: Address) {
        if storage::read_owner(&env).is_some() {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        owner.require_auth();
        storage::write_owner(&env, &owner);
        storage::write_config(&env, &RegistryConfig::default());
        storage::write_total_users(&env, 0);
    }

    /// Get the registry owner.
    pub fn owner(env: Env) -> Address {
        storage::read_owner(&env)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    pub fn config(env: Env) -> RegistryConfig {
        storage::read_config(&env)
    }

    // ========== Owner Functions ==========

    /// Transfer the owner role (owner only).
    pub fn set_owner(env: Env, new_owner: Address, caller: Address) {
        caller.require_auth();
        insert::set_owner(&env, &caller, &new_owner);
    }

    /// Allow an address to register (owner only).
    pub fn add_to_whitelist(env: Env, address: Address, caller: Address) {
        caller.require_auth();
        insert::add_to_whitelist(&env, &caller, &address);
    }

    /// Withdraw first-registration rights (owner only).
    pub fn remove_from_whitelist(env: Env, address: Address, caller: Address) {
        caller.require_auth();
        insert::remove_from_whitelist(&env, &caller, &address);
    }

    pub fn is_whitelisted(env: Env, address: Address) -> bool {
        storage::is_whitelisted(&env, &address)
    }

    /// Replace the registry settings (owner only).
    pub fn set_config(env: Env, config: RegistryConfig, caller: Address) {
        caller.require_auth();
        insert::set_config(&env, &caller, &config);
    }

    /// Upgrade the contract WASM (owner only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let owner = Self::owner(env.clone());
        owner.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ========== Insert ==========

    /// Create the caller's profile on first call, update it afterwards.
    ///
    /// # Panics
    /// - If this is a first registration and the caller is not whitelisted
    /// - If the username is malformed or bound to another address
    #[allow(clippy::too_many_arguments)]
    pub fn create_or_update_profile(
        env: Env,
        full_name: String,
        user_name: Bytes,
        image_url: String,
        email: String,
        location: String,
        description: String,
        caller: Address,
    ) {
        caller.require_auth();
        insert::create_or_update_profile(
            &env,
            &caller,
            ProfileInput {
                full_name,
                user_name,
                image_url,
                email,
                location,
                description,
            },
        );
    }

    /// Overwrite the caller's social links. Empty strings mean "not set".
    #[allow(clippy::too_many_arguments)]
    pub fn create_user_social(
        env: Env,
        website: String,
        twitter: String,
        facebook: String,
        github: String,
        dribbble: String,
        linkedin: String,
        behance: String,
        medium: String,
        caller: Address,
    ) {
        caller.require_auth();
        insert::create_user_social(
            &env,
            &caller,
            SocialLinks {
                website,
                twitter,
                facebook,
                github,
                dribbble,
                linkedin,
                behance,
                medium,
            },
        );
    }

    pub fn create_user_introduction(env: Env, introduction: String, caller: Address) {
        caller.require_auth();
        insert::create_user_introduction(&env, &caller, introduction);
    }

    /// Replace the caller's skill list.
    pub fn create_user_skill(env: Env, skills: Vec<String>, caller: Address) {
        caller.require_auth();
        insert::create_user_skill(&env, &caller, skills);
    }

    /// Append a project and return its index.
    pub fn create_project(
        env: Env,
        name: String,
        short_description: String,
        description: String,
        url: String,
        deleted: bool,
        caller: Address,
    ) -> u32 {
        caller.require_auth();
        insert::create_project(
            &env,
            &caller,
            Project {
                name,
                short_description,
                description,
                url,
                deleted,
            },
        )
    }

    /// Append a work experience entry and return its index.
    #[allow(clippy::too_many_arguments)]
    pub fn create_work_experience(
        env: Env,
        company: String,
        position: String,
        date_start: String,
        date_end: String,
        description: String,
        is_working: bool,
        deleted: bool,
        caller: Address,
    ) -> u32 {
        caller.require_auth();
        insert::create_work_experience(
            &env,
            &caller,
            WorkExperience {
                company,
                position,
                date_start,
                date_end,
                description,
                is_working,
                deleted,
            },
        )
    }

    /// Append an education entry and return its index.
    #[allow(clippy::too_many_arguments)]
    pub fn create_education(
        env: Env,
        organization: String,
        level: String,
        date_start: String,
        date_end: String,
        description: String,
        deleted: bool,
        caller: Address,
    ) -> u32 {
        caller.require_auth();
        insert::create_education(
            &env,
            &caller,
            Education {
                organization,
                level,
                date_start,
                date_end,
                description,
                deleted,
            },
        )
    }

    /// Append a publication and return its index.
    pub fn create_publication(
        env: Env,
        title: String,
        url: String,
        description: String,
        deleted: bool,
        caller: Address,
    ) -> u32 {
        caller.require_auth();
        insert::create_publication(
            &env,
            &caller,
            Publication {
                title,
                url,
                description,
                deleted,
            },
        )
    }

    // ========== Getter ==========

    /// Get a profile. Unregistered addresses yield an empty `user_name`.
    pub fn get_profile(env: Env, address: Address) -> Profile {
        getter::get_profile(&env, &address)
    }

    pub fn get_user_social(env: Env, address: Address) -> SocialLinks {
        getter::get_user_social(&env, &address)
    }

    pub fn get_user_introduction(env: Env, address: Address) -> String {
        getter::get_user_introduction(&env, &address)
    }

    pub fn get_user_skills(env: Env, address: Address) -> Vec<String> {
        getter::get_user_skills(&env, &address)
    }

    pub fn get_project(env: Env, address: Address, index: u32) -> Project {
        getter::get_entry(&env, &address, index)
    }

    pub fn get_work_experience(env: Env, address: Address, index: u32) -> WorkExperience {
        getter::get_entry(&env, &address, index)
    }

    pub fn get_education(env: Env, address: Address, index: u32) -> Education {
        getter::get_entry(&env, &address, index)
    }

    pub fn get_publication(env: Env, address: Address, index: u32) -> Publication {
        getter::get_entry(&env, &address, index)
    }

    pub fn get_project_count(env: Env, address: Address) -> u32 {
        getter::get_count(&env, Collection::Project, &address)
    }

    pub fn get_work_experience_count(env: Env, address: Address) -> u32 {
        getter::get_count(&env, Collection::WorkExperience, &address)
    }

    pub fn get_education_count(env: Env, address: Address) -> u32 {
        getter::get_count(&env, Collection::Education, &address)
    }

    pub fn get_publication_count(env: Env, address: Address) -> u32 {
        getter::get_count(&env, Collection::Publication, &address)
    }

    /// Page through projects, deleted ones included.
    pub fn list_projects(env: Env, address: Address, start: u32, limit: u32) -> Vec<Project> {
        getter::list_entries(&env, &address, start, limit)
    }

    pub fn list_work_experiences(
        env: Env,
        address: Address,
        start: u32,
        limit: u32,
    ) -> Vec<WorkExperience> {
        getter::list_entries(&env, &address, start, limit)
    }

    pub fn list_educations(env: Env, address: Address, start: u32, limit: u32) -> Vec<Education> {
        getter::list_entries(&env, &address, start, limit)
    }

    pub fn list_publications(
        env: Env,
        address: Address,
        start: u32,
        limit: u32,
    ) -> Vec<Publication> {
        getter::list_entries(&env, &address, start, limit)
    }

    /// Resolve a username to its owner.
    pub fn get_address_for_username(env: Env, user_name: Bytes) -> Option<Address> {
        getter::get_address_for_username(&env, &user_name)
    }

    pub fn get_profile_by_username(env: Env, user_name: Bytes) -> Option<Profile> {
        getter::get_profile_by_username(&env, &user_name)
    }

    /// Check if a username can be claimed.
    pub fn is_username_available(env: Env, user_name: Bytes) -> bool {
        getter::is_username_available(&env, &user_name)
    }

    pub fn get_total_users(env: Env) -> u64 {
        getter::get_total_users(&env)
    }

    // ========== Delete ==========

    /// Soft delete one of the caller's projects.
    pub fn delete_project(env: Env, index: u32, caller: Address) {
        caller.require_auth();
        delete::delete_project(&env, &caller, index);
    }

    pub fn delete_work_experience(env: Env, index: u32, caller: Address) {
        caller.require_auth();
        delete::delete_work_experience(&env, &caller, index);
    }

    pub fn delete_education(env: Env, index: u32, caller: Address) {
        caller.require_auth();
        delete::delete_education(&env, &caller, index);
    }

    pub fn delete_publication(env: Env, index: u32, caller: Address) {
        caller.require_auth();
        delete::delete_publication(&env, &caller, index);
    }
}
