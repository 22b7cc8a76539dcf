use crate::AccountDto;

use hub_auth::LocalAccountName;
use hub_provision::{AccountStatus, LinkReport, ProvisionOutcome, ProvisionReport, StepOutcome};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

fn outcome(status: AccountStatus) -> ProvisionOutcome {
    ProvisionOutcome {
        name: LocalAccountName::from_identity("alice").unwrap(),
        status,
        allowed: true,
        admin: false,
    }
}

#[test]
fn given_existing_account_when_converting_then_follow_ups_absent() {
    // When
    let dto = AccountDto::from(outcome(AccountStatus::AlreadyExists));

    // Then
    assert_that!(dto.status.as_str(), eq("existing"));
    assert_that!(dto.group_granted, none());
    assert_that!(dto.storage_linked, none());
}

#[test]
fn given_partial_provisioning_when_converting_then_step_results_reported() {
    // Given
    let report = ProvisionReport {
        group: StepOutcome::Failed {
            diagnostic: "exit status 6".into(),
        },
        storage: LinkReport {
            notebooks_link: StepOutcome::Succeeded,
            home_link: StepOutcome::Succeeded,
        },
    };

    // When
    let dto = AccountDto::from(outcome(AccountStatus::Provisioned(report)));

    // Then
    assert_that!(dto.name.as_str(), eq("alice"));
    assert_that!(dto.status.as_str(), eq("created"));
    assert_that!(dto.group_granted, some(eq(false)));
    assert_that!(dto.storage_linked, some(eq(true)));
}
