//! Account and organisation banners
//!
//! Pure display decisions: given the account status or the selected
//! organisation, decide which banner (if any) the layout shows. Neither
//! banner holds state.

use console_model::{AccountStatus, Organisation};

/// Banner explaining why the signed-in account cannot use the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessBanner {
    /// Access is temporarily suspended
    Suspended,

    /// The account was removed from the organisation
    Removed,
}

impl AccessBanner {
    /// Pick the banner for an account status.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_model::AccountStatus;
    /// use console_state::AccessBanner;
    ///
    /// assert_eq!(AccessBanner::for_status(AccountStatus::Suspended), Some(AccessBanner::Suspended));
    /// assert_eq!(AccessBanner::for_status(AccountStatus::Active), None);
    /// ```
    pub fn for_status(status: AccountStatus) -> Option<Self> {
        match status {
            AccountStatus::Suspended => Some(AccessBanner::Suspended),
            AccountStatus::Removed => Some(AccessBanner::Removed),
            AccountStatus::Active | AccountStatus::Unknown => None,
        }
    }

    /// Pick the banner for a raw status string from the backend.
    pub fn for_status_str(status: &str) -> Option<Self> {
        Self::for_status(AccountStatus::parse(status))
    }

    /// Banner heading.
    pub fn title(&self) -> &'static str {
        match self {
            AccessBanner::Suspended => "Account suspended",
            AccessBanner::Removed => "Account removed",
        }
    }

    /// Banner body.
    pub fn message(&self) -> &'static str {
        match self {
            AccessBanner::Suspended => {
                "Your access to this organisation has been suspended. Contact an organisation administrator to restore it."
            }
            AccessBanner::Removed => {
                "You have been removed from this organisation. Switch to another organisation or ask to be invited again."
            }
        }
    }
}

/// Banner asking the owner of an inactive organisation to upgrade.
pub struct UpgradeBanner<F>
where
    F: Fn(),
{
    on_upgrade: F,
}

impl<F> std::fmt::Debug for UpgradeBanner<F>
where
    F: Fn(),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpgradeBanner").finish_non_exhaustive()
    }
}

impl<F> UpgradeBanner<F>
where
    F: Fn(),
{
    /// Build the banner if the organisation is inactive.
    ///
    /// `on_upgrade` starts the upgrade flow; it runs only when
    /// [`UpgradeBanner::upgrade`] is called.
    pub fn for_organisation(organisation: &Organisation, on_upgrade: F) -> Option<Self> {
        organisation
            .needs_upgrade()
            .then_some(UpgradeBanner { on_upgrade })
    }

    /// Banner body.
    pub fn message(&self) -> &'static str {
        "This organisation is inactive. Upgrade your plan to reconnect devices and restore dashboards."
    }

    /// Label of the single action.
    pub fn action_label(&self) -> &'static str {
        "Upgrade plan"
    }

    /// Trigger the upgrade action.
    pub fn upgrade(&self) {
        (self.on_upgrade)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_suspended_and_removed_are_exclusive() {
        let suspended = AccessBanner::for_status_str("Suspended");
        assert_eq!(suspended, Some(AccessBanner::Suspended));
        assert_ne!(suspended, Some(AccessBanner::Removed));

        let removed = AccessBanner::for_status_str("Removed");
        assert_eq!(removed, Some(AccessBanner::Removed));
        assert_ne!(removed, Some(AccessBanner::Suspended));
    }

    #[test]
    fn test_other_statuses_render_nothing() {
        for status in ["Active", "Pending", "", "suspended-ish"] {
            assert_eq!(AccessBanner::for_status_str(status), None, "status {:?}", status);
        }
    }

    #[test]
    fn test_banner_copy_differs() {
        assert_ne!(AccessBanner::Suspended.message(), AccessBanner::Removed.message());
        assert!(AccessBanner::Suspended.message().contains("suspended"));
        assert!(AccessBanner::Removed.message().contains("removed"));
    }

    #[test]
    fn test_upgrade_banner_only_for_inactive_organisation() {
        let active = Organisation::new("Acme");
        assert!(UpgradeBanner::for_organisation(&active, || {}).is_none());

        let inactive = Organisation::new("Acme").deactivated();
        assert!(UpgradeBanner::for_organisation(&inactive, || {}).is_some());
    }

    #[test]
    fn test_upgrade_action_invokes_callback_per_click() {
        let clicks = Cell::new(0);
        let inactive = Organisation::new("Acme").deactivated();
        let banner = UpgradeBanner::for_organisation(&inactive, || clicks.set(clicks.get() + 1)).unwrap();

        assert_eq!(clicks.get(), 0);
        banner.upgrade();
        banner.upgrade();
        assert_eq!(clicks.get(), 2);
    }
}
