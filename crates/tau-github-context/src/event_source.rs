use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use crate::ContextInputSource;

pub const GITHUB_EVENT_NAME_ENV: &str = "GITHUB_EVENT_NAME";
pub const GITHUB_EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";
pub const GITHUB_ACTOR_ENV: &str = "GITHUB_ACTOR";
pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const GITHUB_RUN_ID_ENV: &str = "GITHUB_RUN_ID";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Repository coordinates; `full_name` is always `owner/repo`.
pub struct Repository {
    owner: String,
    repo: String,
    full_name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        let owner = owner.into();
        let repo = repo.into();
        let full_name = format!("{owner}/{repo}");
        Self {
            owner,
            repo,
            full_name,
        }
    }

    /// Parse an `owner/repo` slug.
    pub fn parse_slug(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (owner, repo) = trimmed
            .split_once('/')
            .ok_or_else(|| anyhow!("invalid repository '{raw}', expected owner/repo"))?;
        let owner = owner.trim();
        let repo = repo.trim();
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            bail!("invalid repository '{raw}', expected owner/repo");
        }
        Ok(Self::new(owner, repo))
    }

    /// Read `repository.owner.login` and `repository.name` from a webhook payload.
    ///
    /// Returns `None` unless both are non-empty strings.
    pub fn from_payload_repository(repository: &Value) -> Option<Self> {
        let owner = repository
            .pointer("/owner/login")
            .and_then(Value::as_str)
            .filter(|login| !login.is_empty())?;
        let name = repository
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())?;
        Some(Self::new(owner, name))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Triggering-event metadata as supplied by the workflow runner.
pub struct AmbientEventSource {
    pub event_name: String,
    pub payload: Value,
    pub actor: String,
    pub repository: Repository,
}

impl AmbientEventSource {
    /// `eventAction`, taken from `payload.action` when it is a string.
    pub fn event_action(&self) -> Option<&str> {
        self.payload.get("action").and_then(Value::as_str)
    }

    /// Load the ambient event from the standard GitHub Actions runner variables.
    pub fn from_github_actions_env(source: &impl ContextInputSource) -> Result<Self> {
        let payload = match source.get(GITHUB_EVENT_PATH_ENV) {
            Some(path) if Path::new(&path).exists() => load_event_payload(Path::new(&path))?,
            Some(path) => {
                tracing::warn!(event_path = %path, "GITHUB_EVENT_PATH does not exist");
                json!({})
            }
            None => json!({}),
        };

        let repository = match source.get(GITHUB_REPOSITORY_ENV) {
            Some(slug) => Repository::parse_slug(&slug)?,
            None => payload
                .get("repository")
                .and_then(Repository::from_payload_repository)
                .ok_or_else(|| {
                    anyhow!("context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'")
                })?,
        };

        Ok(Self {
            event_name: source.get_or(GITHUB_EVENT_NAME_ENV, ""),
            payload,
            actor: source.get_or(GITHUB_ACTOR_ENV, ""),
            repository,
        })
    }
}

fn load_event_payload(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event payload {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse event payload {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{AmbientEventSource, Repository};
    use serde_json::json;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn source(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn unit_repository_full_name_joins_owner_and_repo() {
        let repository = Repository::new("njfio", "tau");
        assert_eq!(repository.full_name(), "njfio/tau");
        assert_eq!(repository.owner(), "njfio");
        assert_eq!(repository.repo(), "tau");
    }

    #[test]
    fn unit_repository_parse_slug_rejects_malformed_values() {
        assert!(Repository::parse_slug("owner").is_err());
        assert!(Repository::parse_slug("/repo").is_err());
        assert!(Repository::parse_slug("owner/repo/extra").is_err());
        assert_eq!(
            Repository::parse_slug(" owner/repo ").expect("slug"),
            Repository::new("owner", "repo")
        );
    }

    #[test]
    fn functional_repository_from_payload_requires_login_and_name() {
        let full = json!({"owner": {"login": "octo"}, "name": "hello"});
        assert_eq!(
            Repository::from_payload_repository(&full),
            Some(Repository::new("octo", "hello"))
        );
        assert_eq!(
            Repository::from_payload_repository(&json!({"owner": {}, "name": "hello"})),
            None
        );
        assert_eq!(
            Repository::from_payload_repository(&json!({"owner": {"login": "octo"}, "name": ""})),
            None
        );
        assert_eq!(Repository::from_payload_repository(&json!("octo/hello")), None);
    }

    #[test]
    fn unit_event_action_reads_string_action_only() {
        let mut ambient = AmbientEventSource {
            event_name: "issues".to_string(),
            payload: json!({"action": "assigned"}),
            actor: "octo".to_string(),
            repository: Repository::new("octo", "hello"),
        };
        assert_eq!(ambient.event_action(), Some("assigned"));
        ambient.payload = json!({"action": 7});
        assert_eq!(ambient.event_action(), None);
    }

    #[test]
    fn integration_from_github_actions_env_reads_runner_variables_and_payload_file() {
        let temp = tempdir().expect("tempdir");
        let event_path = temp.path().join("event.json");
        std::fs::write(&event_path, r#"{"action":"opened","issue":{"number":4}}"#)
            .expect("write event");
        let event_path = event_path.display().to_string();

        let ambient = AmbientEventSource::from_github_actions_env(&source(&[
            ("GITHUB_EVENT_NAME", "issues"),
            ("GITHUB_EVENT_PATH", event_path.as_str()),
            ("GITHUB_ACTOR", "octo"),
            ("GITHUB_REPOSITORY", "octo/hello"),
        ]))
        .expect("ambient");

        assert_eq!(ambient.event_name, "issues");
        assert_eq!(ambient.actor, "octo");
        assert_eq!(ambient.repository.full_name(), "octo/hello");
        assert_eq!(ambient.payload["issue"]["number"], 4);
        assert_eq!(ambient.event_action(), Some("opened"));
    }

    #[test]
    fn regression_from_github_actions_env_falls_back_to_payload_repository() {
        let temp = tempdir().expect("tempdir");
        let event_path = temp.path().join("event.json");
        std::fs::write(
            &event_path,
            r#"{"repository":{"owner":{"login":"octo"},"name":"fallback"}}"#,
        )
        .expect("write event");
        let event_path = event_path.display().to_string();

        let ambient = AmbientEventSource::from_github_actions_env(&source(&[
            ("GITHUB_EVENT_NAME", "issues"),
            ("GITHUB_EVENT_PATH", event_path.as_str()),
        ]))
        .expect("ambient");
        assert_eq!(ambient.repository, Repository::new("octo", "fallback"));
        assert_eq!(ambient.actor, "");
    }

    #[test]
    fn regression_from_github_actions_env_errors_without_any_repository() {
        let error = AmbientEventSource::from_github_actions_env(&source(&[(
            "GITHUB_EVENT_PATH",
            "/nonexistent/tau/event.json",
        )]))
        .expect_err("missing repository");
        assert!(error.to_string().contains("GITHUB_REPOSITORY"));
    }

    #[test]
    fn regression_from_github_actions_env_rejects_invalid_payload_json() {
        let temp = tempdir().expect("tempdir");
        let event_path = temp.path().join("event.json");
        std::fs::write(&event_path, "{not json").expect("write event");
        let event_path = event_path.display().to_string();

        let error = AmbientEventSource::from_github_actions_env(&source(&[
            ("GITHUB_EVENT_PATH", event_path.as_str()),
            ("GITHUB_REPOSITORY", "octo/hello"),
        ]))
        .expect_err("invalid payload");
        assert!(error.to_string().contains("failed to parse event payload"));
    }
}
