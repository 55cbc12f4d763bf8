//! Event-kind predicates over a built [`CanonicalContext`].

use crate::{CanonicalContext, GithubEventKind};

pub fn is_issues_event(context: &CanonicalContext) -> bool {
    context.event_kind() == GithubEventKind::Issues
}

pub fn is_issue_comment_event(context: &CanonicalContext) -> bool {
    context.event_kind() == GithubEventKind::IssueComment
}

pub fn is_pull_request_event(context: &CanonicalContext) -> bool {
    context.event_kind() == GithubEventKind::PullRequest
}

pub fn is_pull_request_review_event(context: &CanonicalContext) -> bool {
    context.event_kind() == GithubEventKind::PullRequestReview
}

pub fn is_pull_request_review_comment_event(context: &CanonicalContext) -> bool {
    context.event_kind() == GithubEventKind::PullRequestReviewComment
}

/// An `issues` event whose action is `assigned`.
pub fn is_issues_assigned_event(context: &CanonicalContext) -> bool {
    is_issues_event(context) && context.event_action() == Some("assigned")
}
