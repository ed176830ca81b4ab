//! Admin Helpers
//!
//! Fire-and-forget user management actions. Success raises a notification
//! and requests a full page reload; failure raises a notification only.
//! There is no optimistic update and nothing to roll back.

use std::sync::Arc;

use log::warn;

use crate::api::StockerApi;
use crate::notify::{NotificationCenter, NotificationKind};
use crate::surface::Surface;

/// User management actions bound to the admin page
pub struct AdminActions {
    api: Arc<dyn StockerApi>,
}

impl AdminActions {
    pub fn new(api: Arc<dyn StockerApi>) -> Self {
        Self { api }
    }

    /// Delete a user after interactive confirmation
    ///
    /// Returns whether the user was deleted.
    pub async fn delete_user(
        &self,
        user_id: u64,
        surface: &mut dyn Surface,
        notifications: &mut NotificationCenter,
    ) -> bool {
        if !surface.confirm("Are you sure you want to delete this user?") {
            return false;
        }

        match self.api.delete_user(user_id).await {
            Ok(()) => {
                notifications.push("User deleted successfully", NotificationKind::Success);
                surface.reload();
                true
            }
            Err(e) => {
                warn!("delete user {user_id} failed: {e}");
                notifications.push("Failed to delete user", NotificationKind::Error);
                false
            }
        }
    }

    /// Suspend a user; no confirmation step
    pub async fn suspend_user(
        &self,
        user_id: u64,
        surface: &mut dyn Surface,
        notifications: &mut NotificationCenter,
    ) -> bool {
        match self.api.suspend_user(user_id).await {
            Ok(()) => {
                notifications.push("User suspended successfully", NotificationKind::Success);
                surface.reload();
                true
            }
            Err(e) => {
                warn!("suspend user {user_id} failed: {e}");
                notifications.push("Failed to suspend user", NotificationKind::Error);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::api::PriceSnapshot;
    use crate::errors::{Error, Result};
    use crate::view::Patch;

    struct FakeAdminApi {
        fail: AtomicBool,
    }

    impl FakeAdminApi {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail: AtomicBool::new(fail),
            })
        }

        fn result(&self, endpoint: &str) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(Error::Status {
                    endpoint: endpoint.to_string(),
                    status: 403,
                })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl StockerApi for FakeAdminApi {
        async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
            Ok(PriceSnapshot::default())
        }

        async fn fetch_portfolio_value(&self, _holder_id: u64) -> Result<f64> {
            Ok(0.0)
        }

        async fn delete_user(&self, user_id: u64) -> Result<()> {
            self.result(&format!("/admin/users/{user_id}"))
        }

        async fn suspend_user(&self, user_id: u64) -> Result<()> {
            self.result(&format!("/admin/users/{user_id}/suspend"))
        }
    }

    #[derive(Default)]
    struct AdminSurface {
        decline: bool,
        confirms: usize,
        reloads: usize,
    }

    impl Surface for AdminSurface {
        fn apply(&mut self, _patch: &Patch) {}

        fn confirm(&mut self, _message: &str) -> bool {
            self.confirms += 1;
            !self.decline
        }

        fn reload(&mut self) {
            self.reloads += 1;
        }
    }

    #[tokio::test]
    async fn test_delete_success_notifies_and_reloads() {
        let actions = AdminActions::new(FakeAdminApi::new(false));
        let mut surface = AdminSurface::default();
        let mut notifications = NotificationCenter::default();

        assert!(
            actions
                .delete_user(3, &mut surface, &mut notifications)
                .await
        );
        assert_eq!(surface.confirms, 1);
        assert_eq!(surface.reloads, 1);
        assert_eq!(notifications.visible().len(), 1);
        assert_eq!(notifications.visible()[0].kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn test_delete_declined_does_nothing() {
        let actions = AdminActions::new(FakeAdminApi::new(false));
        let mut surface = AdminSurface {
            decline: true,
            ..Default::default()
        };
        let mut notifications = NotificationCenter::default();

        assert!(
            !actions
                .delete_user(3, &mut surface, &mut notifications)
                .await
        );
        assert_eq!(surface.reloads, 0);
        assert!(notifications.is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_notifies_only() {
        let actions = AdminActions::new(FakeAdminApi::new(true));
        let mut surface = AdminSurface::default();
        let mut notifications = NotificationCenter::default();

        assert!(
            !actions
                .delete_user(3, &mut surface, &mut notifications)
                .await
        );
        assert_eq!(surface.reloads, 0);
        assert_eq!(notifications.visible()[0].kind, NotificationKind::Error);
        assert_eq!(notifications.visible()[0].message, "Failed to delete user");
    }

    #[tokio::test]
    async fn test_suspend_skips_confirmation() {
        let actions = AdminActions::new(FakeAdminApi::new(false));
        let mut surface = AdminSurface::default();
        let mut notifications = NotificationCenter::default();

        assert!(
            actions
                .suspend_user(5, &mut surface, &mut notifications)
                .await
        );
        assert_eq!(surface.confirms, 0);
        assert_eq!(surface.reloads, 1);
    }
}
