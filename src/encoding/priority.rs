//! Running priority of a way.
//!
//! Each rule votes for a [`PriorityLevel`] under a specificity weight. The
//! vote with the highest weight decides; a rule writing a weight that is
//! already taken replaces the earlier vote instead of adding one.

use std::{cmp::Ordering, collections::BTreeMap};

use crate::{
    encoding::foot::{AVOID_HIGHWAYS, INTENDED_VALUES, NO_SIDEWALK_VALUES, SAFE_HIGHWAYS},
    structures::{PriorityLevel, RouteNetwork, WayTags},
};

pub const NETWORK_WEIGHT: f64 = 50.0;
pub const DESIGNATED_FOOT_WEIGHT: f64 = 100.0;
pub const QUIET_ROAD_WEIGHT: f64 = 40.0;
pub const BUSY_ROAD_WEIGHT: f64 = 45.0;
pub const CYCLEWAY_WEIGHT: f64 = 44.0;

/// Limits in km/h separating quiet and busy roads.
const QUIET_MAX_SPEED: f64 = 20.0;
const BUSY_MAX_SPEED: f64 = 50.0;

#[derive(Debug, Copy, Clone)]
struct Weight(f64);

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VoteTable {
    votes: BTreeMap<Weight, PriorityLevel>,
}

impl VoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, weight: f64, priority: PriorityLevel) {
        self.votes.insert(Weight(weight), priority);
    }

    pub fn get(&self, weight: f64) -> Option<PriorityLevel> {
        self.votes.get(&Weight(weight)).copied()
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes in ascending weight order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, PriorityLevel)> + '_ {
        self.votes.iter().map(|(w, p)| (w.0, *p))
    }

    pub fn resolve(&self) -> Option<PriorityLevel> {
        self.votes.last_key_value().map(|(_, p)| *p)
    }
}

pub fn collect<W: WayTags + ?Sized>(way: &W, network: RouteNetwork) -> VoteTable {
    let mut votes = VoteTable::new();

    if let Some(priority) = network.priority() {
        votes.put(NETWORK_WEIGHT, priority);
    }

    if way.has_tag("foot", "designated") {
        votes.put(DESIGNATED_FOOT_WEIGHT, PriorityLevel::Prefer);
    }

    let highway = way.tag("highway").unwrap_or_default();
    let max_speed = way.max_speed();
    let no_sidewalk = way.has_tag_in("sidewalk", NO_SIDEWALK_VALUES);

    if SAFE_HIGHWAYS.contains(&highway) || (max_speed > 0.0 && max_speed <= QUIET_MAX_SPEED) {
        votes.put(QUIET_ROAD_WEIGHT, PriorityLevel::Prefer);
        if way.has_tag_in("tunnel", INTENDED_VALUES) {
            let tunnel = if no_sidewalk {
                PriorityLevel::ReachDest
            } else {
                PriorityLevel::Unchanged
            };
            votes.put(QUIET_ROAD_WEIGHT, tunnel);
        }
    } else if max_speed > BUSY_MAX_SPEED || AVOID_HIGHWAYS.contains(&highway) {
        let busy = if no_sidewalk {
            PriorityLevel::Worst
        } else {
            PriorityLevel::ReachDest
        };
        votes.put(BUSY_ROAD_WEIGHT, busy);
    }

    if way.has_tag("bicycle", "official") || way.has_tag("bicycle", "designated") {
        votes.put(CYCLEWAY_WEIGHT, PriorityLevel::AvoidIfPossible);
    }

    votes
}

/// Priority of `way` for running, `default` when no rule applies.
pub fn classify<W: WayTags + ?Sized>(
    way: &W,
    network: RouteNetwork,
    default: PriorityLevel,
) -> PriorityLevel {
    collect(way, network).resolve().unwrap_or(default)
}
