//! Sub-collection entry types.
//!
//! Each kind is an append-only sequence per address. Entries are never
//! removed or reindexed; a `deleted` flag marks them as logically gone,
//! so an index handed out once keeps addressing the same entry forever.

use soroban_sdk::{contracttype, Env, IntoVal, String, TryFromVal, Val};

/// The four soft-deletable sequence kinds.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collection {
    Project,
    WorkExperience,
    Education,
    Publication,
}

/// An entry that lives in an indexed, soft-deletable sequence.
pub trait Entry: IntoVal<Env, Val> + TryFromVal<Env, Val> {
    /// Sequence this entry kind is stored in.
    const COLLECTION: Collection;

    fn is_deleted(&self) -> bool;

    /// Flag the entry as deleted. The entry keeps its slot.
    fn mark_deleted(&mut self);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub url: String,
    pub deleted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    /// Free-form date, e.g. `2016-12-20`.
    pub date_start: String,
    /// Empty while `is_working` is set.
    pub date_end: String,
    pub description: String,
    pub is_working: bool,
    pub deleted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Education {
    pub organization: String,
    /// Degree or level, e.g. `Master of Science`.
    pub level: String,
    pub date_start: String,
    pub date_end: String,
    pub description: String,
    pub deleted: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Publication {
    pub title: String,
    pub url: String,
    pub description: String,
    pub deleted: bool,
}

macro_rules! impl_entry {
    ($ty:ty, $collection:expr) => {
        impl Entry for $ty {
            const COLLECTION: Collection = $collection;

            fn is_deleted(&self) -> bool {
                self.deleted
            }

            fn mark_deleted(&mut self) {
                self.deleted = true;
            }
        }
    };
}

impl_entry!(Project, Collection::Project);
impl_entry!(WorkExperience, Collection::WorkExperience);
impl_entry!(Education, Collection::Education);
impl_entry!(Publication, Collection::Publication);
