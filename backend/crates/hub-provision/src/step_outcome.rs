/// Result of a best-effort provisioning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed { diagnostic: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::Failed { diagnostic } => Some(diagnostic),
        }
    }
}

/// Both shared-storage links; each is attempted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub notebooks_link: StepOutcome,
    pub home_link: StepOutcome,
}

impl LinkReport {
    pub fn all_succeeded(&self) -> bool {
        self.notebooks_link.is_success() && self.home_link.is_success()
    }
}
