use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    apply_webhook_override, AmbientEventSource, ContextInputSource, GithubActionInputs,
    GithubContextError, Repository, GITHUB_RUN_ID_ENV, WEBHOOK_EVENT_ENV,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Enumerates the trigger event kinds a canonical context can be built from.
pub enum GithubEventKind {
    Issues,
    IssueComment,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
}

impl GithubEventKind {
    pub const ALL: [Self; 5] = [
        Self::Issues,
        Self::IssueComment,
        Self::PullRequest,
        Self::PullRequestReview,
        Self::PullRequestReviewComment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
            Self::PullRequestReview => "pull_request_review",
            Self::PullRequestReviewComment => "pull_request_review_comment",
        }
    }

    pub fn parse(event_name: &str) -> Result<Self, GithubContextError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == event_name)
            .ok_or_else(|| GithubContextError::UnsupportedEvent {
                event_name: event_name.to_string(),
            })
    }

    /// Payload sub-object that designates the entity for this kind.
    fn entity_key(self) -> &'static str {
        match self {
            Self::Issues | Self::IssueComment => "issue",
            Self::PullRequest | Self::PullRequestReview | Self::PullRequestReviewComment => {
                "pull_request"
            }
        }
    }

    fn entity_field(self) -> &'static str {
        match self {
            Self::Issues | Self::IssueComment => "issue.number",
            Self::PullRequest | Self::PullRequestReview | Self::PullRequestReviewComment => {
                "pull_request.number"
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PayloadEntity {
    number: u64,
    #[serde(default)]
    pull_request: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EntityRef {
    number: u64,
    is_pr: bool,
}

fn resolve_entity(kind: GithubEventKind, payload: &Value) -> Result<EntityRef, GithubContextError> {
    let entity = payload
        .get(kind.entity_key())
        .cloned()
        .and_then(|value| serde_json::from_value::<PayloadEntity>(value).ok())
        .ok_or_else(|| GithubContextError::MissingEntityNumber {
            event_name: kind.as_str().to_string(),
            field: kind.entity_field(),
        })?;

    let is_pr = match kind {
        GithubEventKind::Issues => false,
        GithubEventKind::IssueComment => entity
            .pull_request
            .as_ref()
            .is_some_and(|link| !matches!(link, Value::Null | Value::Bool(false))),
        GithubEventKind::PullRequest
        | GithubEventKind::PullRequestReview
        | GithubEventKind::PullRequestReviewComment => true,
    };
    Ok(EntityRef {
        number: entity.number,
        is_pr,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Normalized trigger context handed to the mode-execution layer.
///
/// Built once by [`build_canonical_context`]; read-only afterwards.
pub struct CanonicalContext {
    run_id: String,
    event_name: GithubEventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    event_action: Option<String>,
    repository: Repository,
    actor: String,
    payload: Value,
    entity_number: u64,
    #[serde(rename = "isPR")]
    is_pr: bool,
    inputs: GithubActionInputs,
}

impl CanonicalContext {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn event_kind(&self) -> GithubEventKind {
        self.event_name
    }

    pub fn event_name(&self) -> &'static str {
        self.event_name.as_str()
    }

    pub fn event_action(&self) -> Option<&str> {
        self.event_action.as_deref()
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn entity_number(&self) -> u64 {
        self.entity_number
    }

    pub fn is_pr(&self) -> bool {
        self.is_pr
    }

    pub fn inputs(&self) -> &GithubActionInputs {
        &self.inputs
    }
}

/// Merge a resolved event source and validated inputs into a [`CanonicalContext`].
pub fn build_canonical_context(
    run_id: impl Into<String>,
    source: AmbientEventSource,
    inputs: GithubActionInputs,
) -> Result<CanonicalContext, GithubContextError> {
    let kind = GithubEventKind::parse(&source.event_name)?;
    let entity = resolve_entity(kind, &source.payload)?;
    tracing::debug!(
        event_name = kind.as_str(),
        entity_number = entity.number,
        is_pr = entity.is_pr,
        "github context dispatched"
    );

    let event_action = source.event_action().map(str::to_string);
    Ok(CanonicalContext {
        run_id: run_id.into(),
        event_name: kind,
        event_action,
        repository: source.repository,
        actor: source.actor,
        payload: source.payload,
        entity_number: entity.number,
        is_pr: entity.is_pr,
        inputs,
    })
}

/// Run the full pipeline against `source`: inputs, ambient event, override, build.
///
/// Mode validation happens before anything else is read.
pub fn parse_github_context(source: &impl ContextInputSource) -> anyhow::Result<CanonicalContext> {
    let inputs = GithubActionInputs::from_source(source)?;
    let ambient = AmbientEventSource::from_github_actions_env(source)?;
    let resolved = apply_webhook_override(ambient, source.get(WEBHOOK_EVENT_ENV).as_deref());
    let run_id = source.get(GITHUB_RUN_ID_ENV).unwrap_or_else(|| {
        tracing::debug!("GITHUB_RUN_ID is not set");
        String::new()
    });
    Ok(build_canonical_context(run_id, resolved, inputs)?)
}
