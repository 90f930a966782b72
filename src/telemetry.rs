use log::Level;

#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    // A second init (hot reload) only fails to replace the logger.
    let _ = console_log::init_with_level(level);
}

pub fn log_event(level: Level, event: &str, fields: serde_json::Value) {
    log::log!(level, "{}", event_payload(level, event, fields));
}

fn event_payload(level: Level, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_merges_fields_after_envelope() {
        let payload = event_payload(
            Level::Info,
            "active_section_changed",
            json!({ "section": "projects" }),
        );

        assert_eq!(
            payload,
            json!({
                "level": "info",
                "event": "active_section_changed",
                "section": "projects",
            })
        );
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(Level::Warn, "contact_submit_rejected", json!("busy"));

        assert_eq!(payload, json!({ "level": "warn", "event": "contact_submit_rejected" }));
    }

    #[test]
    fn error_events_use_lowercase_level() {
        let payload = event_payload(Level::Error, "app_crashed", json!({ "detail": "boom" }));

        assert_eq!(payload["level"], "error");
        assert_eq!(payload["detail"], "boom");
    }
}
