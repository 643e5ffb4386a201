//! In-process local notification center
//!
//! Stand-in for the platform notification center: it tracks the permission
//! grant and the set of pending reminders, keyed by slot id so rescheduling
//! the same slot replaces the old request instead of stacking a duplicate.

use std::collections::HashMap;

use async_trait::async_trait;
use goalfuel_core::{NotificationGateway, ReminderRequest};
use goalfuel_domain::Result;
use parking_lot::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

/// Pending-reminder registry implementing the notification port.
pub struct LocalNotificationCenter {
    permission_granted: bool,
    pending: Mutex<HashMap<Uuid, ReminderRequest>>,
}

impl LocalNotificationCenter {
    pub fn new() -> Self {
        Self::with_permission(true)
    }

    /// Build a center with a fixed permission answer.
    pub fn with_permission(granted: bool) -> Self {
        Self { permission_granted: granted, pending: Mutex::new(HashMap::new()) }
    }

    /// Snapshot of the currently pending reminders, unordered.
    pub fn pending(&self) -> Vec<ReminderRequest> {
        self.pending.lock().values().cloned().collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

impl Default for LocalNotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationGateway for LocalNotificationCenter {
    async fn request_permission(&self) -> Result<bool> {
        info!(granted = self.permission_granted, "notification permission requested");
        Ok(self.permission_granted)
    }

    async fn cancel_all(&self) -> Result<()> {
        let mut pending = self.pending.lock();
        debug!(cancelled = pending.len(), "cancelling pending reminders");
        pending.clear();
        Ok(())
    }

    async fn schedule(&self, request: ReminderRequest) -> Result<()> {
        debug!(id = %request.id, fire_at = %request.fire_at, "reminder scheduled");
        self.pending.lock().insert(request.id, request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;

    fn request(id: Uuid, minute: u32) -> ReminderRequest {
        ReminderRequest {
            id,
            fire_at: Local.with_ymd_and_hms(2025, 6, 12, 10, minute, 0).single().expect("time"),
            title: "Hydration Reminder".into(),
            body: "Time to drink 500ml of water!".into(),
            sound: true,
        }
    }

    #[tokio::test]
    async fn scheduling_same_id_replaces() {
        let center = LocalNotificationCenter::new();
        let id = Uuid::new_v4();

        center.schedule(request(id, 15)).await.expect("schedule");
        center.schedule(request(id, 45)).await.expect("schedule");

        let pending = center.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at.format("%H:%M").to_string(), "10:45");
    }

    #[tokio::test]
    async fn cancel_all_clears_everything() {
        let center = LocalNotificationCenter::new();
        center.schedule(request(Uuid::new_v4(), 15)).await.expect("schedule");
        center.schedule(request(Uuid::new_v4(), 30)).await.expect("schedule");

        center.cancel_all().await.expect("cancel");
        assert_eq!(center.pending_count(), 0);
    }

    #[tokio::test]
    async fn permission_answer_is_fixed() {
        let denied = LocalNotificationCenter::with_permission(false);
        assert!(!denied.request_permission().await.expect("request"));
        assert!(LocalNotificationCenter::new().request_permission().await.expect("request"));
    }
}
