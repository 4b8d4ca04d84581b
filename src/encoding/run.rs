use std::fmt::Display;

use tracing::debug;

use crate::{
    encoding::{
        Access, Capability, EdgeFlags, EncoderConfig, EncoderError, FlagLayout, FootEncoder,
        priority, slope,
    },
    structures::{Edge, PriorityLevel, RouteNetwork, WayTags},
};

/// Encoder for running: pedestrian access and base speed, a running
/// priority per way and slope-adjusted speeds per edge.
#[derive(Debug, Clone)]
pub struct RunEncoder {
    foot: FootEncoder,
}

impl RunEncoder {
    /// Bumped whenever the bit layout or any constant feeding it changes.
    pub const VERSION: u32 = 5;

    pub const DEFAULT_PRIORITY: PriorityLevel = PriorityLevel::Unchanged;

    pub fn new(config: &EncoderConfig) -> Result<Self, EncoderError> {
        let foot = FootEncoder::new(config)?;
        debug!(
            speed_bits = config.speed_bits,
            speed_factor = config.speed_factor,
            block_fords = config.block_fords,
            "run encoder ready"
        );
        Ok(Self { foot })
    }

    pub fn version(&self) -> u32 {
        Self::VERSION
    }

    pub fn layout(&self) -> &FlagLayout {
        self.foot.layout()
    }

    pub fn accept<W: WayTags + ?Sized>(&self, way: &W) -> Access {
        self.foot.accept(way)
    }

    pub fn priority<W: WayTags + ?Sized>(&self, way: &W, network: RouteNetwork) -> PriorityLevel {
        priority::classify(way, network, Self::DEFAULT_PRIORITY)
    }

    /// Way-level attributes shared by every edge of `way`, or `None` when
    /// runners cannot use it.
    pub fn encode<W: WayTags + ?Sized>(&self, way: &W, network: RouteNetwork) -> Option<EdgeFlags> {
        let access = self.accept(way);
        if access.can_skip() {
            return None;
        }

        let mut flags = EdgeFlags::default();
        self.foot.handle_way_tags(way, access, &mut flags);
        self.layout()
            .set_priority(&mut flags, self.priority(way, network));
        Some(flags)
    }

    /// Edge-level pass, run once the edge geometry is known.
    pub fn apply_way_tags<W: WayTags + ?Sized>(&self, way: &W, edge: &mut Edge) {
        slope::adjust(way, edge, self.layout());
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.foot.supports(capability) || capability == Capability::Priority
    }
}

impl Display for RunEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("run")
    }
}
