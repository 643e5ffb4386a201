//! Onboarding completion flag
//!
//! Stored under its own key so a data reset, which only clears the content
//! keys, leaves it untouched and the user is not onboarded twice.

use goalfuel_domain::constants::KEY_ONBOARDING_COMPLETED;
use goalfuel_domain::Result;

use super::blob_store::SharedBlobStore;
use super::{read_json, write_json};

/// Persistent "has the user finished onboarding" flag.
pub struct OnboardingFlag {
    store: SharedBlobStore,
}

impl OnboardingFlag {
    pub fn new(store: SharedBlobStore) -> Self {
        Self { store }
    }

    /// Whether onboarding has been completed. Absent means not yet.
    pub fn is_completed(&self) -> bool {
        read_json(&self.store, KEY_ONBOARDING_COMPLETED).unwrap_or(false)
    }

    /// Record the given completion state.
    pub fn set_completed(&self, completed: bool) -> Result<()> {
        write_json(&self.store, KEY_ONBOARDING_COMPLETED, &completed)
    }
}
