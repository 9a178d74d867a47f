//! Next-action suggestions offered after board interactions.

use super::{BoardDomainError, SuggestionId, Task};
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest title fragment kept in a generated branch name.
const BRANCH_TITLE_SLUG_CHARS: usize = 20;

/// Action a suggestion proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Create a feature branch for a task that was just started.
    Branch,
    /// Open a pull request for a task that was just finished.
    Pr,
    /// Assign an unowned task to the best-matching member.
    Assign,
}

impl SuggestionKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Pr => "pr",
            Self::Assign => "assign",
        }
    }

    const fn template(self) -> PromptTemplate {
        match self {
            Self::Branch => PromptTemplate {
                text: "Ready to start? Let's create a branch.",
                detail: "feature/{{ key | lower }}-{{ title_slug }}",
                action: "Create Branch",
                cancellable: true,
            },
            Self::Pr => PromptTemplate {
                text: "Ready for review? I'll create a pull request.",
                detail: "I'll suggest the best reviewers based on the code changes",
                action: "Create PR",
                cancellable: true,
            },
            Self::Assign => PromptTemplate {
                text: "Perfect match found: {{ assignee }}",
                detail: "Based on expertise and current workload",
                action: "See reasoning",
                cancellable: false,
            },
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct PromptTemplate {
    text: &'static str,
    detail: &'static str,
    action: &'static str,
    cancellable: bool,
}

/// Rendered suggestion bar copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPrompt {
    /// Headline.
    pub text: String,
    /// Secondary line, e.g. the proposed branch name.
    pub detail: String,
    /// Label of the primary button.
    pub action: String,
    /// Whether a separate cancel button is offered.
    pub cancellable: bool,
}

/// The single active next-action proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    id: SuggestionId,
    kind: SuggestionKind,
    task: Task,
    prompt: SuggestionPrompt,
}

impl Suggestion {
    /// Proposes creating a branch for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PromptRender`] when the prompt template
    /// fails to render.
    pub fn branch(task: &Task) -> Result<Self, BoardDomainError> {
        Self::build(SuggestionKind::Branch, task, "")
    }

    /// Proposes opening a pull request for `task`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PromptRender`] when the prompt template
    /// fails to render.
    pub fn pull_request(task: &Task) -> Result<Self, BoardDomainError> {
        Self::build(SuggestionKind::Pr, task, "")
    }

    /// Proposes assigning `task` to `assignee`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::PromptRender`] when the prompt template
    /// fails to render.
    pub fn assign(task: &Task, assignee: &str) -> Result<Self, BoardDomainError> {
        Self::build(SuggestionKind::Assign, task, assignee)
    }

    fn build(kind: SuggestionKind, task: &Task, assignee: &str) -> Result<Self, BoardDomainError> {
        let template = kind.template();
        let environment = Environment::new();
        let ctx = context! {
            key => task.key(),
            title_slug => title_slug(task.title()),
            assignee => assignee,
        };
        let render = |source: &str| {
            environment
                .render_str(source, &ctx)
                .map_err(|error| BoardDomainError::PromptRender {
                    kind: kind.as_str(),
                    reason: error.to_string(),
                })
        };
        let prompt = SuggestionPrompt {
            text: render(template.text)?,
            detail: render(template.detail)?,
            action: template.action.to_owned(),
            cancellable: template.cancellable,
        };

        Ok(Self {
            id: SuggestionId::new(),
            kind,
            task: task.clone(),
            prompt,
        })
    }

    /// Returns the activation identifier.
    #[must_use]
    pub const fn id(&self) -> SuggestionId {
        self.id
    }

    /// Returns the proposed action.
    #[must_use]
    pub const fn kind(&self) -> SuggestionKind {
        self.kind
    }

    /// Returns the task snapshot the suggestion was raised for.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the rendered prompt.
    #[must_use]
    pub const fn prompt(&self) -> &SuggestionPrompt {
        &self.prompt
    }
}

/// Lowercases `title`, turns each whitespace run into one `-`, and keeps the
/// first twenty characters.
#[must_use]
pub fn title_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug.chars().take(BRANCH_TITLE_SLUG_CHARS).collect()
}
