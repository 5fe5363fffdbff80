//! Soft-delete operations.
//!
//! Deleting flips the entry's `deleted` flag in place. Nothing is ever
//! removed, so counts and indices stay stable for later reads.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::entries::{Education, Entry, Project, Publication, WorkExperience};
use crate::events::emit_entry_deleted;
use crate::storage;
use crate::RegistryError;

/// Flag the caller's entry at `index` as deleted.
///
/// Deleting an entry that is already flagged succeeds without writing.
///
/// # Panics
/// - `IndexOutOfRange` if `index` is not below the sequence length
fn soft_delete<T: Entry>(env: &Env, caller: &Address, index: u32) {
    let mut entry: T = storage::read_entry(env, caller, index)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::IndexOutOfRange));

    if entry.is_deleted() {
        return;
    }

    entry.mark_deleted();
    storage::write_entry(env, caller, index, &entry);
    emit_entry_deleted(env, T::COLLECTION, caller, index);
}

pub fn delete_project(env: &Env, caller: &Address, index: u32) {
    soft_delete::<Project>(env, caller, index);
}

pub fn delete_work_experience(env: &Env, caller: &Address, index: u32) {
    soft_delete::<WorkExperience>(env, caller, index);
}

pub fn delete_education(env: &Env, caller: &Address, index: u32) {
    soft_delete::<Education>(env, caller, index);
}

pub fn delete_publication(env: &Env, caller: &Address, index: u32) {
    soft_delete::<Publication>(env, caller, index);
}
