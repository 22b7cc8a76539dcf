#![allow(dead_code)]

//! Test infrastructure for hub-server API tests

use hub_auth::{LocalAccountName, UserRegistry};
use hub_config::{ProvisioningConfig, ServerConfig, SpawnerConfig};
use hub_provision::{
    AccountDatabase, AccountProvisioner, CommandOutcome, CommandRunner, CommandSpec,
    Result as ProvisionResult,
};
use hub_server::AppState;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;

/// Bearer token every test AppState is configured with
pub const TEST_API_TOKEN: &str = "test-gateway-token-0123456789abcdef";

/// Stand-in for the OS: remembers created accounts and every command run.
#[derive(Clone, Default)]
pub struct FakeSystem {
    accounts: Arc<Mutex<HashSet<String>>>,
    commands: Arc<Mutex<Vec<String>>>,
    /// Commands containing this fragment exit with status 1
    failing: Arc<Mutex<Option<String>>>,
}

impl FakeSystem {
    pub fn with_accounts(names: &[&str]) -> Self {
        let system = Self::default();
        system
            .accounts
            .lock()
            .unwrap()
            .extend(names.iter().map(|n| n.to_string()));
        system
    }

    pub fn fail_when(self, fragment: &str) -> Self {
        *self.failing.lock().unwrap() = Some(fragment.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn has_account(&self, name: &str) -> bool {
        self.accounts.lock().unwrap().contains(name)
    }
}

#[async_trait]
impl AccountDatabase for FakeSystem {
    async fn exists(&self, name: &LocalAccountName) -> ProvisionResult<bool> {
        Ok(self.has_account(name))
    }
}

#[async_trait]
impl CommandRunner for FakeSystem {
    async fn run(&self, command: &CommandSpec) -> ProvisionResult<CommandOutcome> {
        let rendered = command.to_string();
        self.commands.lock().unwrap().push(rendered.clone());

        let fails = self
            .failing
            .lock()
            .unwrap()
            .as_deref()
            .is_some_and(|fragment| rendered.contains(fragment));
        if fails {
            return Ok(CommandOutcome::failure(1, "simulated failure"));
        }

        if rendered.contains("adduser")
            && let Some(name) = command.args.last()
        {
            self.accounts.lock().unwrap().insert(name.clone());
        }

        Ok(CommandOutcome::success())
    }
}

/// AppState backed by `system`, with the given allow-list and admin seeds.
pub fn create_test_app_state(system: &FakeSystem, allowed: &[&str], admins: &[&str]) -> AppState {
    let server = ServerConfig {
        api_token: Some(TEST_API_TOKEN.into()),
        cors_allowed_origins: vec!["https://hub.example.edu".into()],
        ..ServerConfig::default()
    };
    create_test_app_state_with(system, allowed, admins, &server)
}

pub fn create_test_app_state_with(
    system: &FakeSystem,
    allowed: &[&str],
    admins: &[&str],
    server: &ServerConfig,
) -> AppState {
    let registry = UserRegistry::new(allowed.iter().copied(), admins.iter().copied());
    let provisioner = AccountProvisioner::new(
        &ProvisioningConfig::default(),
        Arc::new(system.clone()),
        Arc::new(system.clone()),
        registry,
    );

    AppState::new(provisioner, SpawnerConfig::default(), server)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {TEST_API_TOKEN}"))
        .body(Body::empty())
        .unwrap()
}

pub fn get_without_token(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    post_json_with_auth(uri, body, Some(&format!("Bearer {TEST_API_TOKEN}")))
}

/// `authorization` is the raw header value; None sends no header.
pub fn post_json_with_auth(
    uri: &str,
    body: serde_json::Value,
    authorization: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
