//! Labels presentation: progress-message variants and table rows.
//!
//! One formatting function per message variant keeps the conditional
//! clauses (stack, offering/broker) testable in isolation. All functions
//! take the resource type as typed so diagnostics echo the user's input.

use super::LabelMap;

/// "Getting labels for {type} {name} as {user}..."
pub fn default_message(resource_type: &str, name: &str, user: &str) -> String {
    format!("Getting labels for {resource_type} {name} as {user}...")
}

/// Variant for kinds resolved inside the targeted org and space.
pub fn org_space_message(
    resource_type: &str,
    name: &str,
    org: &str,
    space: &str,
    user: &str,
) -> String {
    format!("Getting labels for {resource_type} {name} in org {org} / space {space} as {user}...")
}

/// Variant for kinds resolved inside the targeted org only.
pub fn org_message(resource_type: &str, name: &str, org: &str, user: &str) -> String {
    format!("Getting labels for {resource_type} {name} in org {org} as {user}...")
}

/// Buildpack variant: the stack clause appears only when a stack was given.
pub fn buildpack_message(resource_type: &str, name: &str, stack: Option<&str>, user: &str) -> String {
    match stack {
        Some(stack) => {
            format!("Getting labels for {resource_type} {name} with stack {stack} as {user}...")
        }
        None => default_message(resource_type, name, user),
    }
}

/// Service offering/plan variant.
///
/// The offering clause precedes the broker clause; the "/" separator only
/// appears when both are present.
pub fn service_message(
    resource_type: &str,
    name: &str,
    offering: Option<&str>,
    broker: Option<&str>,
    user: &str,
) -> String {
    let mut message = format!("Getting labels for {resource_type} {name}");

    if offering.is_some() || broker.is_some() {
        message.push_str(" from");
    }
    if let Some(offering) = offering {
        message.push_str(&format!(" service offering {offering}"));
        if broker.is_some() {
            message.push_str(" /");
        }
    }
    if let Some(broker) = broker {
        message.push_str(&format!(" service broker {broker}"));
    }

    message.push_str(&format!(" as {user}..."));
    message
}

/// Two-column rows for the labels table, keys sorted bytewise ascending.
/// Null values render as the empty string.
pub fn label_rows(labels: &LabelMap) -> Vec<Vec<String>> {
    let mut keys: Vec<&String> = labels.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            let value = labels
                .get(key)
                .and_then(|value| value.clone())
                .unwrap_or_default();
            vec![key.clone(), value]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        assert_eq!(
            default_message("org", "business", "admin"),
            "Getting labels for org business as admin..."
        );
    }

    #[test]
    fn test_org_space_message() {
        assert_eq!(
            org_space_message("app", "dora", "business", "dev", "admin"),
            "Getting labels for app dora in org business / space dev as admin..."
        );
    }

    #[test]
    fn test_org_message_names_no_space() {
        let message = org_message("space", "dev", "business", "admin");
        assert_eq!(
            message,
            "Getting labels for space dev in org business as admin..."
        );
        assert!(!message.contains("space dev in org business / space"));
    }

    #[test]
    fn test_buildpack_message_with_stack() {
        assert_eq!(
            buildpack_message("buildpack", "ruby_buildpack", Some("cflinuxfs4"), "admin"),
            "Getting labels for buildpack ruby_buildpack with stack cflinuxfs4 as admin..."
        );
    }

    #[test]
    fn test_buildpack_message_without_stack_omits_clause() {
        let message = buildpack_message("buildpack", "ruby_buildpack", None, "admin");
        assert_eq!(
            message,
            "Getting labels for buildpack ruby_buildpack as admin..."
        );
        assert!(!message.contains("with stack"));
    }

    #[test]
    fn test_service_message_plain() {
        assert_eq!(
            service_message("service-offering", "postgres", None, None, "admin"),
            "Getting labels for service-offering postgres as admin..."
        );
    }

    #[test]
    fn test_service_message_broker_only() {
        assert_eq!(
            service_message("service-offering", "postgres", None, Some("acme"), "admin"),
            "Getting labels for service-offering postgres from service broker acme as admin..."
        );
    }

    #[test]
    fn test_service_message_offering_only() {
        assert_eq!(
            service_message("service-plan", "small", Some("gold"), None, "admin"),
            "Getting labels for service-plan small from service offering gold as admin..."
        );
    }

    #[test]
    fn test_service_message_offering_and_broker() {
        assert_eq!(
            service_message("service-plan", "small", Some("gold"), Some("acme"), "admin"),
            "Getting labels for service-plan small from service offering gold / service broker acme as admin..."
        );
    }

    #[test]
    fn test_label_rows_sorted_bytewise() {
        let mut labels = LabelMap::new();
        labels.insert("b".to_string(), Some("2".to_string()));
        labels.insert("a".to_string(), Some("1".to_string()));
        labels.insert("Z".to_string(), Some("0".to_string()));

        let rows = label_rows(&labels);
        assert_eq!(
            rows,
            vec![
                vec!["Z".to_string(), "0".to_string()],
                vec!["a".to_string(), "1".to_string()],
                vec!["b".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_label_rows_tri_state_values() {
        let mut labels = LabelMap::new();
        labels.insert("present".to_string(), Some("value".to_string()));
        labels.insert("empty".to_string(), Some(String::new()));
        labels.insert("null".to_string(), None);

        let rows = label_rows(&labels);
        assert_eq!(
            rows,
            vec![
                vec!["empty".to_string(), String::new()],
                vec!["null".to_string(), String::new()],
                vec!["present".to_string(), "value".to_string()],
            ]
        );
    }
}
