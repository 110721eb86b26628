//! Resource Kind Registry
//!
//! The closed set of resource categories the labels command can query,
//! together with the per-kind metadata the dispatcher needs: which target
//! context the kind requires and which disambiguator flags apply to it.
//! Adding a kind is a data change here, not a new branch at call sites.

/// Target context a resource kind requires before retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRequirement {
    None,
    Org,
    OrgAndSpace,
}

impl TargetRequirement {
    /// The (needs_org, needs_space) pair consumed by the session target check.
    pub fn flags(self) -> (bool, bool) {
        match self {
            TargetRequirement::None => (false, false),
            TargetRequirement::Org => (true, false),
            TargetRequirement::OrgAndSpace => (true, true),
        }
    }
}

/// A resource category the platform attaches labels to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    App,
    Buildpack,
    Domain,
    Org,
    Route,
    Space,
    Stack,
    ServiceBroker,
    ServiceOffering,
    ServicePlan,
}

/// All kinds, in the order they are listed in command help.
pub const ALL_KINDS: [ResourceKind; 10] = [
    ResourceKind::App,
    ResourceKind::Buildpack,
    ResourceKind::Domain,
    ResourceKind::Org,
    ResourceKind::Route,
    ResourceKind::ServiceBroker,
    ResourceKind::ServiceOffering,
    ResourceKind::ServicePlan,
    ResourceKind::Space,
    ResourceKind::Stack,
];

impl ResourceKind {
    /// Match a user-typed resource type against the registry.
    ///
    /// Matching is case-insensitive with no trimming. `None` is the
    /// "unsupported kind" sentinel; it is not an error here and surfaces
    /// only at dispatch time.
    pub fn canonicalize(raw: &str) -> Option<ResourceKind> {
        match raw.to_lowercase().as_str() {
            "app" => Some(ResourceKind::App),
            "buildpack" => Some(ResourceKind::Buildpack),
            "domain" => Some(ResourceKind::Domain),
            "org" => Some(ResourceKind::Org),
            "route" => Some(ResourceKind::Route),
            "space" => Some(ResourceKind::Space),
            "stack" => Some(ResourceKind::Stack),
            "service-broker" => Some(ResourceKind::ServiceBroker),
            "service-offering" => Some(ResourceKind::ServiceOffering),
            "service-plan" => Some(ResourceKind::ServicePlan),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::App => "app",
            ResourceKind::Buildpack => "buildpack",
            ResourceKind::Domain => "domain",
            ResourceKind::Org => "org",
            ResourceKind::Route => "route",
            ResourceKind::Space => "space",
            ResourceKind::Stack => "stack",
            ResourceKind::ServiceBroker => "service-broker",
            ResourceKind::ServiceOffering => "service-offering",
            ResourceKind::ServicePlan => "service-plan",
        }
    }

    /// Target context this kind requires. Apps and routes live in a space,
    /// spaces live in an org; everything else resolves globally.
    pub fn target_requirement(self) -> TargetRequirement {
        match self {
            ResourceKind::App | ResourceKind::Route => TargetRequirement::OrgAndSpace,
            ResourceKind::Space => TargetRequirement::Org,
            _ => TargetRequirement::None,
        }
    }

    /// Whether the `--stack` disambiguator is legal for this kind.
    pub fn allows_stack(self) -> bool {
        self == ResourceKind::Buildpack
    }

    /// Whether the `--broker` disambiguator is legal for this kind.
    pub fn allows_broker(self) -> bool {
        matches!(
            self,
            ResourceKind::ServiceOffering | ResourceKind::ServicePlan
        )
    }

    /// Whether the `--offering` disambiguator is legal for this kind.
    pub fn allows_offering(self) -> bool {
        self == ResourceKind::ServicePlan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_is_case_insensitive() {
        assert_eq!(ResourceKind::canonicalize("app"), Some(ResourceKind::App));
        assert_eq!(ResourceKind::canonicalize("App"), Some(ResourceKind::App));
        assert_eq!(ResourceKind::canonicalize("APP"), Some(ResourceKind::App));
        assert_eq!(
            ResourceKind::canonicalize("Service-Plan"),
            Some(ResourceKind::ServicePlan)
        );
    }

    #[test]
    fn test_canonicalize_does_not_trim() {
        assert_eq!(ResourceKind::canonicalize(" app"), None);
        assert_eq!(ResourceKind::canonicalize("app "), None);
    }

    #[test]
    fn test_canonicalize_unknown_is_sentinel() {
        assert_eq!(ResourceKind::canonicalize("application"), None);
        assert_eq!(ResourceKind::canonicalize("unknown-resource"), None);
        assert_eq!(ResourceKind::canonicalize(""), None);
    }

    #[test]
    fn test_name_round_trips_through_canonicalize() {
        for kind in ALL_KINDS {
            assert_eq!(ResourceKind::canonicalize(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_target_requirements() {
        assert_eq!(
            ResourceKind::App.target_requirement(),
            TargetRequirement::OrgAndSpace
        );
        assert_eq!(
            ResourceKind::Route.target_requirement(),
            TargetRequirement::OrgAndSpace
        );
        assert_eq!(
            ResourceKind::Space.target_requirement(),
            TargetRequirement::Org
        );
        for kind in [
            ResourceKind::Buildpack,
            ResourceKind::Domain,
            ResourceKind::Org,
            ResourceKind::Stack,
            ResourceKind::ServiceBroker,
            ResourceKind::ServiceOffering,
            ResourceKind::ServicePlan,
        ] {
            assert_eq!(kind.target_requirement(), TargetRequirement::None);
        }
    }

    #[test]
    fn test_target_requirement_flags() {
        assert_eq!(TargetRequirement::None.flags(), (false, false));
        assert_eq!(TargetRequirement::Org.flags(), (true, false));
        assert_eq!(TargetRequirement::OrgAndSpace.flags(), (true, true));
    }

    #[test]
    fn test_disambiguator_registry() {
        for kind in ALL_KINDS {
            assert_eq!(kind.allows_stack(), kind == ResourceKind::Buildpack);
            assert_eq!(
                kind.allows_broker(),
                kind == ResourceKind::ServiceOffering || kind == ResourceKind::ServicePlan
            );
            assert_eq!(kind.allows_offering(), kind == ResourceKind::ServicePlan);
        }
    }
}
