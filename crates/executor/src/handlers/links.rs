//! Identity and entity link handlers.

use chronicle_core::{
    identity_link_types, scope_types, EntityLinkType, HistoricEntityLink, HistoricIdentityLink,
};
use chronicle_storage::{HistoryState, HistoryStore};

use super::require_id;
use crate::types::IdentityLinkScope;
use crate::{Error, Output, Result};

/// Handle GetHistoricIdentityLinks command.
///
/// For a task, the task's assignee and owner are reported as user links of
/// type `assignee` / `owner` even when no such link was recorded.
pub fn get_historic_identity_links(
    store: &HistoryStore,
    scope: IdentityLinkScope,
) -> Result<Output> {
    let links = match scope {
        IdentityLinkScope::Task(task_id) => {
            require_id("task id", &task_id)?;
            store.read(|s| task_identity_links(s, &task_id))?
        }
        IdentityLinkScope::ProcessInstance(process_instance_id) => {
            require_id("process instance id", &process_instance_id)?;
            let owner = Some(process_instance_id.as_str());
            store.read(|s| {
                s.identity_links()
                    .filter(|l| l.process_instance_id.as_deref() == owner)
                    .cloned()
                    .collect()
            })
        }
    };
    Ok(Output::IdentityLinks(links))
}

fn task_identity_links(s: &HistoryState, task_id: &str) -> Result<Vec<HistoricIdentityLink>> {
    let task = s.task(task_id).ok_or_else(|| Error::NotFound {
        entity: "historic task instance".to_string(),
        id: task_id.to_string(),
    })?;

    let mut links: Vec<HistoricIdentityLink> = s
        .identity_links()
        .filter(|l| l.task_id.as_deref() == Some(task_id))
        .cloned()
        .collect();

    let implied = [
        (identity_link_types::ASSIGNEE, task.assignee.as_deref()),
        (identity_link_types::OWNER, task.owner.as_deref()),
    ];
    for (link_type, user) in implied {
        let Some(user) = user else { continue };
        let recorded = links
            .iter()
            .any(|l| l.link_type == link_type && l.user_id.as_deref() == Some(user));
        if !recorded {
            links.push(HistoricIdentityLink::for_task_user(task_id, link_type, user));
        }
    }
    Ok(links)
}

fn entity_links(store: &HistoryStore, keep: impl Fn(&HistoricEntityLink) -> bool) -> Output {
    Output::EntityLinks(store.read(|s| {
        s.entity_links()
            .filter(|l| l.link_type == EntityLinkType::Child && keep(l))
            .cloned()
            .collect()
    }))
}

/// Handle GetEntityLinkChildrenForProcessInstance command.
pub fn entity_link_children_for_process_instance(
    store: &HistoryStore,
    process_instance_id: String,
) -> Result<Output> {
    require_id("process instance id", &process_instance_id)?;
    Ok(entity_links(store, |l| l.is_owned_by(&process_instance_id, scope_types::BPMN)))
}

/// Handle GetEntityLinkChildrenForTask command.
pub fn entity_link_children_for_task(store: &HistoryStore, task_id: String) -> Result<Output> {
    require_id("task id", &task_id)?;
    Ok(entity_links(store, |l| l.is_owned_by(&task_id, scope_types::TASK)))
}

/// Handle GetEntityLinkParentForProcessInstance command.
pub fn entity_link_parent_for_process_instance(
    store: &HistoryStore,
    process_instance_id: String,
) -> Result<Output> {
    require_id("process instance id", &process_instance_id)?;
    Ok(entity_links(store, |l| l.references(&process_instance_id, scope_types::BPMN)))
}

/// Handle GetEntityLinkParentForTask command.
pub fn entity_link_parent_for_task(store: &HistoryStore, task_id: String) -> Result<Output> {
    require_id("task id", &task_id)?;
    Ok(entity_links(store, |l| l.references(&task_id, scope_types::TASK)))
}
