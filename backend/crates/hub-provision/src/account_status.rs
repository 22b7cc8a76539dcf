use crate::{LinkReport, StepOutcome};

use hub_auth::LocalAccountName;

/// What the follow-up steps of a fresh account reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub group: StepOutcome,
    pub storage: LinkReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    AlreadyExists,
    Provisioned(ProvisionReport),
}

impl AccountStatus {
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Provisioned(_))
    }
}

/// Everything the login flow needs to know after provisioning an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub name: LocalAccountName,
    pub status: AccountStatus,
    pub allowed: bool,
    pub admin: bool,
}
