use std::collections::HashMap;

const FERRY_VALUES: &[&str] = &["ferry", "shuttle_train"];

/// Read-only view over the tags of a single way.
pub trait WayTags {
    fn tag(&self, key: &str) -> Option<&str>;

    fn has_tag(&self, key: &str, value: &str) -> bool {
        self.tag(key) == Some(value)
    }

    fn has_tag_in(&self, key: &str, values: &[&str]) -> bool {
        self.tag(key).is_some_and(|v| values.contains(&v))
    }

    /// Declared speed limit in km/h, or 0.0 when no limit parses.
    ///
    /// Directional limits are taken into account and the lowest one wins.
    fn max_speed(&self) -> f64 {
        ["maxspeed", "maxspeed:forward", "maxspeed:backward"]
            .iter()
            .filter_map(|key| self.tag(key))
            .filter_map(parse_speed)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    fn is_ferry(&self) -> bool {
        self.has_tag_in("route", FERRY_VALUES)
    }
}

/// Parses an OSM speed value such as `50`, `30 mph` or `walk` into km/h.
pub fn parse_speed(value: &str) -> Option<f64> {
    let value = value.trim();
    if value == "walk" {
        return Some(6.0);
    }

    let (number, factor) = if let Some(v) = value.strip_suffix("mph") {
        (v, 1.609)
    } else if let Some(v) = value.strip_suffix("knots") {
        (v, 1.852)
    } else if let Some(v) = value
        .strip_suffix("km/h")
        .or_else(|| value.strip_suffix("kmh"))
        .or_else(|| value.strip_suffix("kph"))
    {
        (v, 1.0)
    } else {
        (value, 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .map(|speed| speed * factor)
        .filter(|speed| speed.is_finite() && *speed > 0.0)
}

#[derive(Debug, Clone, Default)]
pub struct OsmWay {
    id: i64,
    tags: HashMap<String, String>,
}

impl OsmWay {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            tags: HashMap::new(),
        }
    }

    pub fn from_tags<'a, I>(id: i64, tags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            id,
            tags: tags
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

impl WayTags for OsmWay {
    fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
