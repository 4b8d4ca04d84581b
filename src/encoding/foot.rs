//! Base pedestrian encoder: access and base speed.

use crate::{
    encoding::{
        EdgeFlags, EncoderConfig, EncoderError, FlagLayout,
        speed::{FERRY_SPEED, MEAN_SPEED, SLOW_SPEED},
    },
    structures::WayTags,
};

/// Road classes that are pleasant and safe on foot.
pub const SAFE_HIGHWAYS: &[&str] = &[
    "footway",
    "path",
    "steps",
    "pedestrian",
    "living_street",
    "track",
    "residential",
    "service",
];

/// Road classes with busy traffic.
pub const AVOID_HIGHWAYS: &[&str] = &[
    "trunk",
    "trunk_link",
    "primary",
    "primary_link",
    "secondary",
    "secondary_link",
    "tertiary",
    "tertiary_link",
];

const OTHER_ALLOWED_HIGHWAYS: &[&str] = &["cycleway", "unclassified", "road"];

/// `sidewalk` values meaning there is nothing to walk on beside the road.
pub const NO_SIDEWALK_VALUES: &[&str] = &["no", "none", "separate"];

pub const INTENDED_VALUES: &[&str] = &["yes", "designated", "official", "permissive"];

const RESTRICTED_VALUES: &[&str] = &["private", "no", "restricted", "military", "emergency"];

const ALLOWED_SAC_SCALES: &[&str] = &[
    "hiking",
    "mountain_hiking",
    "demanding_mountain_hiking",
    "alpine_hiking",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Access {
    Way,
    Ferry,
    Skip,
}

impl Access {
    pub fn can_skip(self) -> bool {
        self == Access::Skip
    }
}

/// Weightings an encoder can feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    Fastest,
    Shortest,
    Priority,
}

#[derive(Debug, Clone)]
pub struct FootEncoder {
    layout: FlagLayout,
    block_fords: bool,
}

impl FootEncoder {
    /// Fails when the layout cannot hold every speed the encoder writes.
    pub fn new(config: &EncoderConfig) -> Result<Self, EncoderError> {
        let layout = FlagLayout::new(config.speed_bits, config.speed_factor)?;
        if layout.max_storable_speed() < FERRY_SPEED {
            return Err(EncoderError::SpeedRangeTooSmall {
                max: layout.max_storable_speed(),
                required: FERRY_SPEED,
            });
        }

        Ok(Self {
            layout,
            block_fords: config.block_fords,
        })
    }

    pub fn layout(&self) -> &FlagLayout {
        &self.layout
    }

    pub fn blocks_fords(&self) -> bool {
        self.block_fords
    }

    pub fn accept<W: WayTags + ?Sized>(&self, way: &W) -> Access {
        let Some(highway) = way.tag("highway") else {
            if way.is_ferry() && !way.has_tag_in("foot", RESTRICTED_VALUES) {
                return Access::Ferry;
            }
            return Access::Skip;
        };

        if way
            .tag("sac_scale")
            .is_some_and(|s| !ALLOWED_SAC_SCALES.contains(&s))
        {
            return Access::Skip;
        }

        if way.has_tag_in("foot", INTENDED_VALUES) {
            return Access::Way;
        }

        if way.has_tag("motorroad", "yes") {
            return Access::Skip;
        }

        let allowed = SAFE_HIGHWAYS.contains(&highway)
            || AVOID_HIGHWAYS.contains(&highway)
            || OTHER_ALLOWED_HIGHWAYS.contains(&highway);
        if !allowed {
            return Access::Skip;
        }

        if way.has_tag_in("foot", RESTRICTED_VALUES) || way.has_tag_in("access", RESTRICTED_VALUES)
        {
            return Access::Skip;
        }

        if self.block_fords && (way.has_tag("ford", "yes") || highway == "ford") {
            return Access::Skip;
        }

        Access::Way
    }

    /// Writes access bits and the base speed.
    pub fn handle_way_tags<W: WayTags + ?Sized>(
        &self,
        way: &W,
        access: Access,
        flags: &mut EdgeFlags,
    ) {
        if access.can_skip() {
            return;
        }

        let speed = match access {
            Access::Ferry => FERRY_SPEED,
            _ if way.tag("sac_scale").is_some_and(|s| s != "hiking") => SLOW_SPEED,
            _ => MEAN_SPEED,
        };
        self.layout.set_speed(flags, speed);

        let forward = !way.has_tag("oneway:foot", "-1");
        let backward = !way.has_tag("oneway:foot", "yes");
        self.layout.set_access(flags, false, forward);
        self.layout.set_access(flags, true, backward);
    }

    pub fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Fastest | Capability::Shortest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::OsmWay;

    fn encoder() -> FootEncoder {
        FootEncoder::new(&EncoderConfig::default()).unwrap()
    }

    fn way(tags: &[(&str, &str)]) -> OsmWay {
        OsmWay::from_tags(1, tags.iter().copied())
    }

    #[test]
    fn test_rejects_layouts_too_narrow_for_speeds() {
        let narrow = |speed_bits, speed_factor| {
            FootEncoder::new(&EncoderConfig {
                speed_bits,
                speed_factor,
                ..EncoderConfig::default()
            })
        };

        assert_eq!(
            narrow(1, 1.0).unwrap_err(),
            EncoderError::SpeedRangeTooSmall {
                max: 1.0,
                required: FERRY_SPEED
            }
        );
        assert!(narrow(3, 1.0).is_err());
        assert!(narrow(4, 0.5).is_err());
        assert_eq!(narrow(4, 1.0).unwrap().layout().max_storable_speed(), 15.0);
        assert!(narrow(2, 5.0).is_ok());
    }

    #[test]
    fn test_accept_highways() {
        let enc = encoder();
        assert_eq!(enc.accept(&way(&[("highway", "footway")])), Access::Way);
        assert_eq!(enc.accept(&way(&[("highway", "primary")])), Access::Way);
        assert_eq!(enc.accept(&way(&[("highway", "motorway")])), Access::Skip);
        assert_eq!(enc.accept(&way(&[("building", "yes")])), Access::Skip);
        assert_eq!(
            enc.accept(&way(&[("highway", "motorway"), ("foot", "designated")])),
            Access::Way
        );
    }

    #[test]
    fn test_accept_restrictions() {
        let enc = encoder();
        assert_eq!(
            enc.accept(&way(&[("highway", "path"), ("access", "private")])),
            Access::Skip
        );
        assert_eq!(
            enc.accept(&way(&[("highway", "path"), ("sac_scale", "difficult_alpine_hiking")])),
            Access::Skip
        );
        assert_eq!(
            enc.accept(&way(&[("highway", "tertiary"), ("motorroad", "yes")])),
            Access::Skip
        );
    }

    #[test]
    fn test_accept_ferries() {
        let enc = encoder();
        assert_eq!(enc.accept(&way(&[("route", "ferry")])), Access::Ferry);
        assert_eq!(
            enc.accept(&way(&[("route", "ferry"), ("foot", "no")])),
            Access::Skip
        );
    }

    #[test]
    fn test_fords_follow_config() {
        let ford = way(&[("highway", "track"), ("ford", "yes")]);
        assert_eq!(encoder().accept(&ford), Access::Skip);

        let open = FootEncoder::new(&EncoderConfig {
            block_fords: false,
            ..EncoderConfig::default()
        })
        .unwrap();
        assert!(!open.blocks_fords());
        assert_eq!(open.accept(&ford), Access::Way);
    }

    #[test]
    fn test_base_speeds_and_access() {
        let enc = encoder();
        let layout = *enc.layout();

        let mut flags = EdgeFlags::default();
        let footway = way(&[("highway", "footway")]);
        enc.handle_way_tags(&footway, enc.accept(&footway), &mut flags);
        assert_eq!(layout.speed(flags), MEAN_SPEED);
        assert!(layout.access(flags, false));
        assert!(layout.access(flags, true));

        let mut flags = EdgeFlags::default();
        let alpine = way(&[("highway", "path"), ("sac_scale", "mountain_hiking")]);
        enc.handle_way_tags(&alpine, enc.accept(&alpine), &mut flags);
        assert_eq!(layout.speed(flags), SLOW_SPEED);

        let mut flags = EdgeFlags::default();
        let ferry = way(&[("route", "ferry")]);
        enc.handle_way_tags(&ferry, enc.accept(&ferry), &mut flags);
        assert_eq!(layout.speed(flags), FERRY_SPEED);

        let mut flags = EdgeFlags::default();
        let oneway = way(&[("highway", "footway"), ("oneway:foot", "yes")]);
        enc.handle_way_tags(&oneway, enc.accept(&oneway), &mut flags);
        assert!(layout.access(flags, false));
        assert!(!layout.access(flags, true));

        let mut flags = EdgeFlags::default();
        enc.handle_way_tags(&footway, Access::Skip, &mut flags);
        assert_eq!(flags, EdgeFlags::default());
    }

    #[test]
    fn test_supports() {
        let enc = encoder();
        assert!(enc.supports(Capability::Fastest));
        assert!(enc.supports(Capability::Shortest));
        assert!(!enc.supports(Capability::Priority));
    }
}
