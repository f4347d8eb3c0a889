use super::profile::Profile;
use super::selection::SelectionSet;

/// One loaded profile together with the keys selected from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSlot {
    /// Display name, usually the source file path.
    pub name: String,
    pub profile: Profile,
    pub selection: SelectionSet,
}

/// Caller-owned state for one compare-and-merge session.
///
/// Each side is either absent or a fully-parsed profile; loading a side
/// replaces it wholesale and resets its selection, so a selection can
/// never refer to a profile the caller no longer holds. The core
/// services take the session by reference and keep no state of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeSession {
    first: Option<ProfileSlot>,
    second: Option<ProfileSlot>,
}

impl MergeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load (or replace) profile 1. Clears its selection.
    pub fn load_first(&mut self, name: impl Into<String>, profile: Profile) {
        self.first = Some(ProfileSlot {
            name: name.into(),
            profile,
            selection: SelectionSet::new(),
        });
    }

    /// Load (or replace) profile 2. Clears its selection.
    pub fn load_second(&mut self, name: impl Into<String>, profile: Profile) {
        self.second = Some(ProfileSlot {
            name: name.into(),
            profile,
            selection: SelectionSet::new(),
        });
    }

    pub fn first(&self) -> Option<&ProfileSlot> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&ProfileSlot> {
        self.second.as_ref()
    }

    pub fn first_mut(&mut self) -> Option<&mut ProfileSlot> {
        self.first.as_mut()
    }

    pub fn second_mut(&mut self) -> Option<&mut ProfileSlot> {
        self.second.as_mut()
    }

    /// Whether both profiles are loaded and a merge may proceed.
    pub fn is_ready(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }
}
