use hub_provision::SpawnPlan;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SpawnPlanResponse {
    pub user: String,
    pub argv: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub working_dir: String,
    pub default_url: String,
    pub http_timeout_secs: u64,
    pub start_timeout_secs: u64,
}

impl From<SpawnPlan> for SpawnPlanResponse {
    fn from(plan: SpawnPlan) -> Self {
        Self {
            user: plan.user,
            argv: plan.argv,
            env: plan.env,
            working_dir: plan.working_dir.display().to_string(),
            default_url: plan.default_url,
            http_timeout_secs: plan.http_timeout.as_secs(),
            start_timeout_secs: plan.start_timeout.as_secs(),
        }
    }
}
