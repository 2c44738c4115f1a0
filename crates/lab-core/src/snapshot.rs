//! Loaded entity collections for one workspace.
//!
//! The engine never talks to storage. A caller loads a [`Snapshot`] (the CLI
//! reads it from JSON) and narrows it to one idea with [`Snapshot::scope`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deliverable, Idea, Task, UpdateLog};
use crate::errors::CoreError;

/// Every record of a single workspace, as handed to the analytics engine.
///
/// All records must share one `workspace_id`; [`Snapshot::validate`]
/// rejects a mix.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub ideas: Vec<Idea>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub logs: Vec<UpdateLog>,
}

/// Records belonging to a single idea, in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaScope {
    pub idea_id: String,
    pub tasks: Vec<Task>,
    pub deliverables: Vec<Deliverable>,
    pub logs: Vec<UpdateLog>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the JSON is malformed or a field
    /// fails validation (for example a month that is not `YYYY-MM`).
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_str(text)
            .map_err(|e| CoreError::Validation(format!("invalid snapshot: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check range and workspace constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first [`CoreError::Validation`] found.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.check_single_workspace()?;
        for idea in &self.ideas {
            idea.priority_inputs.validate()?;
        }
        for task in &self.tasks {
            task.validate()?;
        }
        Ok(())
    }

    /// The workspace every record belongs to, or `None` for an empty snapshot.
    #[must_use]
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_ids().next()
    }

    fn workspace_ids(&self) -> impl Iterator<Item = &str> {
        let ideas = self.ideas.iter().map(|i| i.workspace_id.as_str());
        let tasks = self.tasks.iter().map(|t| t.workspace_id.as_str());
        let deliverables = self.deliverables.iter().map(|d| d.workspace_id.as_str());
        let logs = self.logs.iter().map(|l| l.workspace_id.as_str());
        ideas.chain(tasks).chain(deliverables).chain(logs)
    }

    fn check_single_workspace(&self) -> Result<(), CoreError> {
        let mut ids = self.workspace_ids();
        let Some(first) = ids.next() else {
            return Ok(());
        };
        match ids.find(|id| *id != first) {
            Some(other) => Err(CoreError::Validation(format!(
                "snapshot mixes workspaces '{first}' and '{other}'"
            ))),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn idea(&self, idea_id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == idea_id)
    }

    /// Narrow the snapshot to one idea.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no idea has `idea_id`.
    pub fn scope(&self, idea_id: &str) -> Result<IdeaScope, CoreError> {
        if self.idea(idea_id).is_none() {
            return Err(CoreError::NotFound {
                entity_type: "idea".to_string(),
                id: idea_id.to_string(),
            });
        }

        Ok(IdeaScope {
            idea_id: idea_id.to_string(),
            tasks: self.tasks_for_idea(idea_id).cloned().collect(),
            deliverables: self.deliverables_for_idea(idea_id).cloned().collect(),
            logs: self.logs_for_idea(idea_id).cloned().collect(),
        })
    }

    pub fn tasks_for_idea<'a>(&'a self, idea_id: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.idea_id == idea_id)
    }

    pub fn deliverables_for_idea<'a>(
        &'a self,
        idea_id: &'a str,
    ) -> impl Iterator<Item = &'a Deliverable> {
        self.deliverables.iter().filter(move |d| d.idea_id == idea_id)
    }

    pub fn logs_for_idea<'a>(&'a self, idea_id: &'a str) -> impl Iterator<Item = &'a UpdateLog> {
        self.logs.iter().filter(move |l| l.idea_id == idea_id)
    }
}
