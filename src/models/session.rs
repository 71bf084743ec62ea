//! Hierarchical session identifiers.

/// Identifies one conversation between an agent and an end-user.
///
/// Renders as
/// `projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}`,
/// with the environment defaulting to `draft` and the user to `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPath {
    pub project_id: String,
    pub session_id: String,
    pub user_id: Option<String>,
    pub environment_id: Option<String>,
}

impl SessionPath {
    /// Session in the draft environment for the default user.
    pub fn new(project_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            session_id: session_id.into(),
            user_id: None,
            environment_id: None,
        }
    }

    /// Scope the session to a specific end-user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Scope the session to a published environment.
    pub fn with_environment(mut self, environment_id: impl Into<String>) -> Self {
        self.environment_id = Some(environment_id.into());
        self
    }

    /// The relative resource path of this session.
    #[must_use]
    pub fn as_path(&self) -> String {
        format!(
            "projects/{}/agent/environments/{}/users/{}/sessions/{}",
            self.project_id,
            self.environment_id.as_deref().unwrap_or("draft"),
            self.user_id.as_deref().unwrap_or("-"),
            self.session_id
        )
    }
}

impl std::fmt::Display for SessionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_path())
    }
}
