use hub_provision::{AccountStatus, ProvisionOutcome};

use serde::Serialize;

/// Provisioning result as seen by the login flow.
///
/// `group_granted` and `storage_linked` are `None` when the account already
/// existed and no follow-up steps ran.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub name: String,
    /// "created" or "existing"
    pub status: String,
    pub group_granted: Option<bool>,
    pub storage_linked: Option<bool>,
    pub allowed: bool,
    pub admin: bool,
}

impl From<ProvisionOutcome> for AccountDto {
    fn from(outcome: ProvisionOutcome) -> Self {
        let (status, group_granted, storage_linked) = match &outcome.status {
            AccountStatus::AlreadyExists => ("existing", None, None),
            AccountStatus::Provisioned(report) => (
                "created",
                Some(report.group.is_success()),
                Some(report.storage.all_succeeded()),
            ),
        };

        Self {
            name: outcome.name.to_string(),
            status: status.to_string(),
            group_granted,
            storage_linked,
            allowed: outcome.allowed,
            admin: outcome.admin,
        }
    }
}
