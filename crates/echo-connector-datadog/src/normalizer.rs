// normalizer.rs — Spinnaker event → DataDog event.
//
// Pure transformation, no I/O. Tag derivation rules:
//
//   source / eventType / application   always, from the metadata
//   executionType / Status / Id        when content has an "execution" object,
//                                      even if the entry itself is null/missing
//                                      (renders the literal "null")
//   pipelineName / pipelineConfigId    only when present and non-null
//
// The last two rows differ on purpose; see DESIGN.md. An "execution" entry
// that is not a JSON object counts as absent.

use std::collections::BTreeSet;

use echo_events::Event;
use serde_json::Value;

use crate::error::DataDogConnectorError;
use crate::payload::{DataDogEvent, EVENT_ALERT_TYPE, EVENT_PRIORITY, EVENT_TITLE};

/// Derive the DataDog event for a Spinnaker event.
///
/// `text` is the whole original event serialized to JSON; the only failure
/// mode is a serialization error, which propagates to the caller.
pub fn normalize(event: &Event) -> Result<DataDogEvent, DataDogConnectorError> {
    let mut tags = BTreeSet::new();
    tags.insert(format!("source:{}", event.details.source));
    tags.insert(format!("eventType:{}", event.details.event_type));
    tags.insert(format!("application:{}", event.details.application));

    if let Some(Value::Object(execution)) = event.content.get("execution") {
        tags.insert(format!("executionType:{}", tag_value(execution.get("type"))));
        tags.insert(format!(
            "executionStatus:{}",
            tag_value(execution.get("status"))
        ));
        tags.insert(format!("executionId:{}", tag_value(execution.get("id"))));
        if let Some(name) = non_null(execution.get("name")) {
            tags.insert(format!("pipelineName:{}", tag_value(Some(name))));
        }
        if let Some(config_id) = non_null(execution.get("pipelineConfigId")) {
            tags.insert(format!("pipelineConfigId:{}", tag_value(Some(config_id))));
        }
    }

    Ok(DataDogEvent {
        title: EVENT_TITLE.to_string(),
        text: serde_json::to_string(event)?,
        priority: EVENT_PRIORITY.to_string(),
        tags,
        alert_type: EVENT_ALERT_TYPE.to_string(),
    })
}

/// Render an execution entry for use in a tag. Strings contribute their
/// contents unquoted; a null or missing entry contributes the literal
/// "null"; anything else contributes its compact JSON rendering.
fn tag_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_events::Metadata;
    use serde_json::json;
    use std::collections::HashMap;

    fn pipeline_event() -> Event {
        let mut content = HashMap::new();
        content.insert(
            "execution".to_string(),
            json!({
                "type": "PIPELINE",
                "id": "01E307DBPNB1YJ9D0BW5X4NAEY",
                "application": "plugintest",
                "name": "testNewStageFromPlugin",
                "status": "RUNNING",
                "pipelineConfigId": "f514b57a-63af-4f5f-ac0a-2bc12d6c363b"
            }),
        );
        Event::new(Metadata::new("orca", "orca:task:complete", "plugintest"))
            .with_content(content)
    }

    fn tag_set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn event_without_execution_gets_exactly_the_base_tags() {
        let event = Event::new(Metadata::new("igor", "git:push", "myapp"));

        let dd = normalize(&event).unwrap();

        assert_eq!(
            dd.tags,
            tag_set(&["source:igor", "eventType:git:push", "application:myapp"])
        );
    }

    #[test]
    fn execution_adds_all_five_execution_tags() {
        let dd = normalize(&pipeline_event()).unwrap();

        assert_eq!(
            dd.tags,
            tag_set(&[
                "source:orca",
                "eventType:orca:task:complete",
                "application:plugintest",
                "executionId:01E307DBPNB1YJ9D0BW5X4NAEY",
                "executionType:PIPELINE",
                "executionStatus:RUNNING",
                "pipelineName:testNewStageFromPlugin",
                "pipelineConfigId:f514b57a-63af-4f5f-ac0a-2bc12d6c363b",
            ])
        );
    }

    #[test]
    fn null_name_and_missing_config_id_are_omitted() {
        let mut content = HashMap::new();
        content.insert(
            "execution".to_string(),
            json!({
                "type": "ORCHESTRATION",
                "id": "01E307DBPNB1YJ9D0BW5X4NAEY",
                "application": "plugintest",
                "name": null,
                "status": "SUCCEEDED"
            }),
        );
        let event = Event::new(Metadata::new(
            "orca",
            "orca:orchestration:complete",
            "plugintest",
        ))
        .with_content(content);

        let dd = normalize(&event).unwrap();

        assert_eq!(
            dd.tags,
            tag_set(&[
                "source:orca",
                "eventType:orca:orchestration:complete",
                "application:plugintest",
                "executionId:01E307DBPNB1YJ9D0BW5X4NAEY",
                "executionType:ORCHESTRATION",
                "executionStatus:SUCCEEDED",
            ])
        );
    }

    #[test]
    fn missing_required_execution_fields_render_as_null() {
        let mut content = HashMap::new();
        content.insert("execution".to_string(), json!({"type": "ORCHESTRATION"}));
        let event = Event::new(Metadata::new(
            "orca",
            "orca:orchestration:complete",
            "plugintest",
        ))
        .with_content(content);

        let dd = normalize(&event).unwrap();

        assert!(dd.tags.contains("executionType:ORCHESTRATION"));
        assert!(dd.tags.contains("executionStatus:null"));
        assert!(dd.tags.contains("executionId:null"));
        assert!(!dd.tags.iter().any(|t| t.starts_with("pipelineName:")));
        assert!(!dd.tags.iter().any(|t| t.starts_with("pipelineConfigId:")));
        assert_eq!(dd.tags.len(), 6);
    }

    #[test]
    fn non_object_execution_counts_as_absent() {
        let mut content = HashMap::new();
        content.insert("execution".to_string(), json!("PIPELINE"));
        let event =
            Event::new(Metadata::new("orca", "orca:task:complete", "myapp")).with_content(content);

        let dd = normalize(&event).unwrap();

        assert_eq!(dd.tags.len(), 3);
        assert!(!dd.tags.iter().any(|t| t.starts_with("executionType:")));
    }

    #[test]
    fn non_string_execution_values_render_as_compact_json() {
        let mut content = HashMap::new();
        content.insert(
            "execution".to_string(),
            json!({"type": "PIPELINE", "id": 42, "status": true}),
        );
        let event =
            Event::new(Metadata::new("orca", "orca:task:complete", "myapp")).with_content(content);

        let dd = normalize(&event).unwrap();

        assert!(dd.tags.contains("executionId:42"));
        assert!(dd.tags.contains("executionStatus:true"));
    }

    #[test]
    fn empty_metadata_values_still_produce_tags() {
        let event = Event::new(Metadata::new("", "", ""));

        let dd = normalize(&event).unwrap();

        assert_eq!(dd.tags, tag_set(&["source:", "eventType:", "application:"]));
    }

    #[test]
    fn text_is_the_full_original_event() {
        let event = pipeline_event();

        let dd = normalize(&event).unwrap();

        let body: serde_json::Value = serde_json::from_str(&dd.text).unwrap();
        assert_eq!(body, serde_json::to_value(&event).unwrap());
        // Full fidelity: nulls for unset metadata fields are present.
        assert!(body["details"].get("organization").is_some());
        assert!(body["details"]["organization"].is_null());
    }

    #[test]
    fn constants_are_fixed() {
        let dd = normalize(&pipeline_event()).unwrap();

        assert_eq!(dd.title, "Spinnaker Event");
        assert_eq!(dd.priority, "normal");
        assert_eq!(dd.alert_type, "info");
    }
}
