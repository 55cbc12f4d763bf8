use serde::Serialize;

use crate::{
    parse_additional_permissions, parse_bool_flag, parse_multiline_input, AdditionalPermissions,
    ContextInputSource, GithubContextError, ModeName, DEFAULT_MODE,
};

pub const MODE_ENV: &str = "MODE";
pub const TRIGGER_PHRASE_ENV: &str = "TRIGGER_PHRASE";
pub const ASSIGNEE_TRIGGER_ENV: &str = "ASSIGNEE_TRIGGER";
pub const LABEL_TRIGGER_ENV: &str = "LABEL_TRIGGER";
pub const ALLOWED_TOOLS_ENV: &str = "ALLOWED_TOOLS";
pub const DISALLOWED_TOOLS_ENV: &str = "DISALLOWED_TOOLS";
pub const CUSTOM_INSTRUCTIONS_ENV: &str = "CUSTOM_INSTRUCTIONS";
pub const DIRECT_PROMPT_ENV: &str = "DIRECT_PROMPT";
pub const OVERRIDE_PROMPT_ENV: &str = "OVERRIDE_PROMPT";
pub const BASE_BRANCH_ENV: &str = "BASE_BRANCH";
pub const BRANCH_PREFIX_ENV: &str = "BRANCH_PREFIX";
pub const USE_STICKY_COMMENT_ENV: &str = "USE_STICKY_COMMENT";
pub const ADDITIONAL_PERMISSIONS_ENV: &str = "ADDITIONAL_PERMISSIONS";
pub const USE_COMMIT_SIGNING_ENV: &str = "USE_COMMIT_SIGNING";

pub const DEFAULT_TRIGGER_PHRASE: &str = "@claude";
pub const DEFAULT_BRANCH_PREFIX: &str = "claude/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Validated action inputs carried on every canonical context.
pub struct GithubActionInputs {
    pub mode: ModeName,
    pub trigger_phrase: String,
    pub assignee_trigger: String,
    pub label_trigger: String,
    pub allowed_tools: Vec<String>,
    pub disallowed_tools: Vec<String>,
    pub custom_instructions: String,
    pub direct_prompt: String,
    pub override_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_branch: Option<String>,
    pub branch_prefix: String,
    pub use_sticky_comment: bool,
    pub additional_permissions: AdditionalPermissions,
    pub use_commit_signing: bool,
}

impl GithubActionInputs {
    /// Resolve every action input from `source`, validating the mode first.
    pub fn from_source(source: &impl ContextInputSource) -> Result<Self, GithubContextError> {
        let mode = resolve_mode(source)?;
        Ok(Self {
            mode,
            trigger_phrase: source.get_or(TRIGGER_PHRASE_ENV, DEFAULT_TRIGGER_PHRASE),
            assignee_trigger: source.get_or(ASSIGNEE_TRIGGER_ENV, ""),
            label_trigger: source.get_or(LABEL_TRIGGER_ENV, ""),
            allowed_tools: parse_multiline_input(&source.get_or(ALLOWED_TOOLS_ENV, "")),
            disallowed_tools: parse_multiline_input(&source.get_or(DISALLOWED_TOOLS_ENV, "")),
            custom_instructions: source.get_or(CUSTOM_INSTRUCTIONS_ENV, ""),
            direct_prompt: source.get_or(DIRECT_PROMPT_ENV, ""),
            override_prompt: source.get_or(OVERRIDE_PROMPT_ENV, ""),
            base_branch: source.get(BASE_BRANCH_ENV),
            branch_prefix: source.get_or(BRANCH_PREFIX_ENV, DEFAULT_BRANCH_PREFIX),
            use_sticky_comment: parse_bool_flag(source.get(USE_STICKY_COMMENT_ENV).as_deref()),
            additional_permissions: parse_additional_permissions(
                &source.get_or(ADDITIONAL_PERMISSIONS_ENV, ""),
            ),
            use_commit_signing: parse_bool_flag(source.get(USE_COMMIT_SIGNING_ENV).as_deref()),
        })
    }
}

/// Resolve `MODE` against the registry, falling back to [`DEFAULT_MODE`] when unset.
pub fn resolve_mode(source: &impl ContextInputSource) -> Result<ModeName, GithubContextError> {
    match source.get(MODE_ENV) {
        Some(raw) => raw.parse(),
        None => Ok(DEFAULT_MODE),
    }
}
