//! Identity and entity link lookups.

use chronicle_core::{HistoricEntityLink, HistoricIdentityLink};

use super::HistoryService;
use crate::types::IdentityLinkScope;
use crate::{Command, Error, Output, Result};

impl HistoryService {
    // =========================================================================
    // Identity Links (2)
    // =========================================================================

    /// Identity links of a task, including its assignee and owner.
    ///
    /// # Errors
    ///
    /// `NotFound` when no such task was recorded.
    pub fn get_historic_identity_links_for_task(
        &self,
        task_id: &str,
    ) -> Result<Vec<HistoricIdentityLink>> {
        self.identity_links(IdentityLinkScope::task(task_id))
    }

    /// Identity links of a process instance.
    pub fn get_historic_identity_links_for_process_instance(
        &self,
        process_instance_id: &str,
    ) -> Result<Vec<HistoricIdentityLink>> {
        self.identity_links(IdentityLinkScope::process_instance(process_instance_id))
    }

    fn identity_links(&self, scope: IdentityLinkScope) -> Result<Vec<HistoricIdentityLink>> {
        match self
            .executor
            .execute(Command::GetHistoricIdentityLinks { scope })?
        {
            Output::IdentityLinks(links) => Ok(links),
            _ => Err(Error::unexpected_output("GetHistoricIdentityLinks")),
        }
    }

    // =========================================================================
    // Entity Links (4)
    // =========================================================================

    /// Links to the scopes a process instance created.
    pub fn get_historic_entity_link_children_for_process_instance(
        &self,
        process_instance_id: &str,
    ) -> Result<Vec<HistoricEntityLink>> {
        self.entity_links(Command::GetEntityLinkChildrenForProcessInstance {
            process_instance_id: process_instance_id.to_string(),
        })
    }

    /// Links to the scopes a task created.
    pub fn get_historic_entity_link_children_for_task(
        &self,
        task_id: &str,
    ) -> Result<Vec<HistoricEntityLink>> {
        self.entity_links(Command::GetEntityLinkChildrenForTask {
            task_id: task_id.to_string(),
        })
    }

    /// Links from the scopes that created a process instance.
    pub fn get_historic_entity_link_parent_for_process_instance(
        &self,
        process_instance_id: &str,
    ) -> Result<Vec<HistoricEntityLink>> {
        self.entity_links(Command::GetEntityLinkParentForProcessInstance {
            process_instance_id: process_instance_id.to_string(),
        })
    }

    /// Links from the scopes that created a task.
    pub fn get_historic_entity_link_parent_for_task(
        &self,
        task_id: &str,
    ) -> Result<Vec<HistoricEntityLink>> {
        self.entity_links(Command::GetEntityLinkParentForTask {
            task_id: task_id.to_string(),
        })
    }

    fn entity_links(&self, cmd: Command) -> Result<Vec<HistoricEntityLink>> {
        let name = cmd.name();
        match self.executor.execute(cmd)? {
            Output::EntityLinks(links) => Ok(links),
            _ => Err(Error::unexpected_output(name)),
        }
    }
}
