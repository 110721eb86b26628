//! Labels query: the immutable request value and its flag validation.

use crate::error::CommandError;
use crate::resource::ResourceKind;

/// A single labels request as typed by the user.
///
/// `resource_type` is kept raw; canonicalization happens on demand so that
/// diagnostics can always echo the user's spelling.
#[derive(Debug, Clone)]
pub struct LabelsQuery {
    pub resource_type: String,
    pub resource_name: String,
    pub stack: Option<String>,
    pub broker: Option<String>,
    pub offering: Option<String>,
}

impl LabelsQuery {
    /// The canonical resource kind, or `None` for an unsupported type.
    pub fn kind(&self) -> Option<ResourceKind> {
        ResourceKind::canonicalize(&self.resource_type)
    }

    /// The stack disambiguator, with an empty string treated as unset.
    pub fn stack(&self) -> Option<&str> {
        flag_value(self.stack.as_deref())
    }

    /// The service broker disambiguator, with an empty string treated as unset.
    pub fn broker(&self) -> Option<&str> {
        flag_value(self.broker.as_deref())
    }

    /// The service offering disambiguator, with an empty string treated as unset.
    pub fn offering(&self) -> Option<&str> {
        flag_value(self.offering.as_deref())
    }

    /// Reject disambiguators that do not apply to the requested kind.
    ///
    /// Matching runs against the canonical kind; the first violation is
    /// reported with the resource type as typed. An unsupported kind fails
    /// here too whenever a disambiguator is set, since no unknown kind
    /// accepts one.
    pub fn validate(&self) -> Result<(), CommandError> {
        let kind = self.kind();

        if self.stack().is_some() && !kind.is_some_and(ResourceKind::allows_stack) {
            return Err(self.combination_error("--stack, -s"));
        }

        if self.broker().is_some() && !kind.is_some_and(ResourceKind::allows_broker) {
            return Err(self.combination_error("--broker, -b"));
        }

        if self.offering().is_some() && !kind.is_some_and(ResourceKind::allows_offering) {
            return Err(self.combination_error("--offering, -e"));
        }

        Ok(())
    }

    fn combination_error(&self, flag: &'static str) -> CommandError {
        CommandError::ArgumentCombination {
            resource: self.resource_type.clone(),
            flag,
        }
    }
}

fn flag_value(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(resource_type: &str) -> LabelsQuery {
        LabelsQuery {
            resource_type: resource_type.to_string(),
            resource_name: "some-resource".to_string(),
            stack: None,
            broker: None,
            offering: None,
        }
    }

    #[test]
    fn test_validate_accepts_bare_queries_for_all_kinds() {
        for resource_type in [
            "app",
            "buildpack",
            "domain",
            "org",
            "route",
            "space",
            "stack",
            "service-broker",
            "service-offering",
            "service-plan",
            "unknown-kind",
        ] {
            assert!(query(resource_type).validate().is_ok());
        }
    }

    #[test]
    fn test_stack_flag_only_valid_for_buildpacks() {
        for resource_type in [
            "app",
            "domain",
            "org",
            "route",
            "space",
            "stack",
            "service-broker",
            "service-offering",
            "service-plan",
            "unknown-kind",
        ] {
            let mut q = query(resource_type);
            q.stack = Some("cflinuxfs4".to_string());
            match q.validate() {
                Err(CommandError::ArgumentCombination { resource, flag }) => {
                    assert_eq!(resource, resource_type);
                    assert_eq!(flag, "--stack, -s");
                }
                other => panic!("expected combination error, got {:?}", other),
            }
        }

        let mut q = query("buildpack");
        q.stack = Some("cflinuxfs4".to_string());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_broker_flag_only_valid_for_offerings_and_plans() {
        for resource_type in ["app", "buildpack", "domain", "org", "space", "unknown-kind"] {
            let mut q = query(resource_type);
            q.broker = Some("acme".to_string());
            match q.validate() {
                Err(CommandError::ArgumentCombination { resource, flag }) => {
                    assert_eq!(resource, resource_type);
                    assert_eq!(flag, "--broker, -b");
                }
                other => panic!("expected combination error, got {:?}", other),
            }
        }

        for resource_type in ["service-offering", "service-plan"] {
            let mut q = query(resource_type);
            q.broker = Some("acme".to_string());
            assert!(q.validate().is_ok());
        }
    }

    #[test]
    fn test_offering_flag_only_valid_for_plans() {
        for resource_type in ["app", "service-broker", "service-offering", "unknown-kind"] {
            let mut q = query(resource_type);
            q.offering = Some("gold".to_string());
            match q.validate() {
                Err(CommandError::ArgumentCombination { resource, flag }) => {
                    assert_eq!(resource, resource_type);
                    assert_eq!(flag, "--offering, -e");
                }
                other => panic!("expected combination error, got {:?}", other),
            }
        }

        let mut q = query("service-plan");
        q.offering = Some("gold".to_string());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_error_preserves_resource_type_as_typed() {
        let mut q = query("APP");
        q.stack = Some("cflinuxfs4".to_string());
        match q.validate() {
            Err(CommandError::ArgumentCombination { resource, .. }) => {
                assert_eq!(resource, "APP");
            }
            other => panic!("expected combination error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_flag_values_are_treated_as_unset() {
        let mut q = query("org");
        q.stack = Some(String::new());
        q.broker = Some(String::new());
        q.offering = Some(String::new());
        assert!(q.validate().is_ok());
        assert_eq!(q.stack(), None);
        assert_eq!(q.broker(), None);
        assert_eq!(q.offering(), None);
    }

    #[test]
    fn test_first_violation_wins() {
        let mut q = query("domain");
        q.stack = Some("cflinuxfs4".to_string());
        q.broker = Some("acme".to_string());
        match q.validate() {
            Err(CommandError::ArgumentCombination { flag, .. }) => {
                assert_eq!(flag, "--stack, -s");
            }
            other => panic!("expected combination error, got {:?}", other),
        }
    }
}
