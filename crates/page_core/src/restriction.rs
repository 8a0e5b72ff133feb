use std::fmt;
use std::str::FromStr;

/// Access-restriction rules that can be attached to a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RestrictionKind {
    ApiKey,
    Date,
    File,
    HitLimit,
    OriginIp,
    Throttle,
    Time,
    TlsCert,
}

impl RestrictionKind {
    pub const ALL: [RestrictionKind; 8] = [
        RestrictionKind::ApiKey,
        RestrictionKind::Date,
        RestrictionKind::File,
        RestrictionKind::HitLimit,
        RestrictionKind::OriginIp,
        RestrictionKind::Throttle,
        RestrictionKind::Time,
        RestrictionKind::TlsCert,
    ];

    pub fn identifier(self) -> &'static str {
        match self {
            RestrictionKind::ApiKey => "api_key",
            RestrictionKind::Date => "date",
            RestrictionKind::File => "file",
            RestrictionKind::HitLimit => "hit_limit",
            RestrictionKind::OriginIp => "origin_ip",
            RestrictionKind::Throttle => "throttle",
            RestrictionKind::Time => "time",
            RestrictionKind::TlsCert => "tls_cert",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown restriction type '{0}'")]
pub struct UnknownRestrictionKind(pub String);

impl FromStr for RestrictionKind {
    type Err = UnknownRestrictionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RestrictionKind::ALL
            .into_iter()
            .find(|kind| kind.identifier() == s.trim())
            .ok_or_else(|| UnknownRestrictionKind(s.to_string()))
    }
}

/// Mutually exclusive visual state of a restriction group container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionClass {
    Neutral,
    Success,
    Failed,
}

impl RestrictionClass {
    pub const ALL: [RestrictionClass; 3] = [
        RestrictionClass::Success,
        RestrictionClass::Failed,
        RestrictionClass::Neutral,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            RestrictionClass::Neutral => "panel-default",
            RestrictionClass::Success => "panel-success",
            RestrictionClass::Failed => "panel-danger",
        }
    }

    /// Every class a container may carry; all are cleared before one is set.
    pub fn all_css_classes() -> [&'static str; 3] {
        Self::ALL.map(RestrictionClass::css_class)
    }
}

/// Visual state for a group, from its checkbox and failed marker.
pub fn classify(checked: bool, failed: bool) -> RestrictionClass {
    match (checked, failed) {
        (false, _) => RestrictionClass::Neutral,
        (true, true) => RestrictionClass::Failed,
        (true, false) => RestrictionClass::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_is_neutral_regardless_of_marker() {
        assert_eq!(classify(false, false), RestrictionClass::Neutral);
        assert_eq!(classify(false, true), RestrictionClass::Neutral);
    }

    #[test]
    fn checked_depends_on_marker() {
        assert_eq!(classify(true, true), RestrictionClass::Failed);
        assert_eq!(classify(true, false), RestrictionClass::Success);
    }

    #[test]
    fn kinds_round_trip_through_identifiers() {
        for kind in RestrictionKind::ALL {
            assert_eq!(kind.identifier().parse::<RestrictionKind>(), Ok(kind));
        }
        assert!("geo".parse::<RestrictionKind>().is_err());
    }
}
