//! Process instance history log handler.

use chronicle_core::{DetailKind, HistoricDetail};
use chronicle_storage::{HistoryState, HistoryStore};

use super::require_id;
use crate::types::{HistoricData, HistoryLogCriteria, ProcessInstanceHistoryLog};
use crate::{Output, Result};

/// Handle GetProcessInstanceHistoryLog command.
///
/// Elements are sorted by time. The sort is stable and each kind is added
/// in id order, so ties keep the order tasks, activities, variables,
/// variable updates, form properties.
pub fn get_process_instance_history_log(
    store: &HistoryStore,
    query: HistoryLogCriteria,
) -> Result<Output> {
    require_id("process instance id", &query.process_instance_id)?;
    let log = store.read(|s| build_log(s, &query));
    Ok(Output::HistoryLog(log.map(Box::new)))
}

fn build_log(s: &HistoryState, query: &HistoryLogCriteria) -> Option<ProcessInstanceHistoryLog> {
    let process_instance = s.process_instance(&query.process_instance_id)?.clone();
    let owned = Some(query.process_instance_id.as_str());
    let mut historic_data = Vec::new();

    if query.include_tasks {
        let mut tasks: Vec<_> = s
            .tasks()
            .filter(|t| t.process_instance_id.as_deref() == owned)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        historic_data.extend(tasks.into_iter().map(HistoricData::Task));
    }

    if query.include_activities {
        let mut activities: Vec<_> = s
            .activities()
            .filter(|a| a.process_instance_id == query.process_instance_id)
            .cloned()
            .collect();
        activities.sort_by(|a, b| a.id.cmp(&b.id));
        historic_data.extend(activities.into_iter().map(HistoricData::Activity));
    }

    if query.include_variables {
        let mut variables: Vec<_> = s
            .variables()
            .filter(|v| v.process_instance_id.as_deref() == owned)
            .cloned()
            .collect();
        variables.sort_by(|a, b| a.id.cmp(&b.id));
        historic_data.extend(variables.into_iter().map(HistoricData::Variable));
    }

    if query.include_variable_updates || query.include_form_properties {
        let mut details: Vec<HistoricDetail> = s
            .details()
            .filter(|d| d.process_instance_id.as_deref() == owned)
            .cloned()
            .collect();
        details.sort_by(|a, b| a.id.cmp(&b.id));
        let (updates, forms): (Vec<_>, Vec<_>) = details
            .into_iter()
            .partition(|d| matches!(d.kind, DetailKind::VariableUpdate { .. }));
        if query.include_variable_updates {
            historic_data.extend(updates.into_iter().map(HistoricData::VariableUpdate));
        }
        if query.include_form_properties {
            historic_data.extend(forms.into_iter().map(HistoricData::FormProperty));
        }
    }

    historic_data.sort_by_key(HistoricData::time);

    Some(ProcessInstanceHistoryLog {
        process_instance,
        historic_data,
    })
}
