use crate::structures::PriorityLevel;

/// Class of the walking route network a way belongs to.
///
/// Variants are declared from least to most important, so `max` picks the
/// class that should win when several route relations cover the same way.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteNetwork {
    #[default]
    Other,
    Local,
    Regional,
    National,
    International,
}

impl RouteNetwork {
    /// Maps the `network` tag of a hiking/foot route relation.
    pub fn from_tag(network: &str) -> RouteNetwork {
        match network {
            "iwn" => RouteNetwork::International,
            "nwn" => RouteNetwork::National,
            "rwn" => RouteNetwork::Regional,
            "lwn" => RouteNetwork::Local,
            _ => RouteNetwork::Other,
        }
    }

    pub fn priority(self) -> Option<PriorityLevel> {
        match self {
            RouteNetwork::International | RouteNetwork::National => Some(PriorityLevel::Best),
            RouteNetwork::Regional | RouteNetwork::Local => Some(PriorityLevel::VeryNice),
            RouteNetwork::Other => None,
        }
    }
}
