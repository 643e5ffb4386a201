//! Reset coordinator
//!
//! Clears every persisted domain blob and fans the event out to active
//! components, which re-initialize from empty state.

pub mod events;
pub mod ports;

use std::sync::Arc;

use goalfuel_domain::constants::{
    KEY_HYDRATION_ENTRIES, KEY_HYDRATION_SETTINGS, KEY_MEAL_ENTRIES, KEY_SAVED_TRAININGS,
};
use tracing::{info, warn};

use events::{AppEvent, EventBus};
use ports::DomainStore;

/// Keys removed by a full reset. The onboarding flag deliberately survives.
const RESET_KEYS: [&str; 4] =
    [KEY_HYDRATION_ENTRIES, KEY_HYDRATION_SETTINGS, KEY_MEAL_ENTRIES, KEY_SAVED_TRAININGS];

/// Deletes all persisted domain state and broadcasts the reset event.
pub struct ResetService {
    store: Arc<dyn DomainStore>,
    events: EventBus,
}

impl ResetService {
    pub fn new(store: Arc<dyn DomainStore>, events: EventBus) -> Self {
        Self { store, events }
    }

    /// Irreversibly clear all domain blobs, then publish `DataReset`.
    ///
    /// User confirmation happens before this call, in the UI collaborator.
    /// Individual removal failures are logged and do not stop the rest of
    /// the reset; subscribers still re-initialize.
    pub async fn reset_all(&self) {
        for key in RESET_KEYS {
            if let Err(err) = self.store.remove(key).await {
                warn!(key, error = %err, "failed to remove blob during reset");
            }
        }

        self.events.publish(AppEvent::DataReset);
        info!("all domain data reset");
    }
}
