use std::collections::{HashMap, HashSet};

use osmpbf::{Element, ElementReader, RelMemberType};
use tracing::{debug, info, warn};

use crate::{
    encoding::{EdgeFlags, RunEncoder},
    structures::{Edge, Graph, LatLng, NodeData, OsmWay, PointList, RouteNetwork},
};

const WALKING_ROUTES: &[&str] = &["hiking", "foot", "walking"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub ways: usize,
    pub edges: usize,
    pub failed: usize,
}

/// Loads every way `encoder` accepts, one edge per pair of consecutive nodes.
pub fn load_pbf_file(
    pbf_path: &str,
    g: &mut Graph,
    encoder: &RunEncoder,
) -> Result<LoadStats, osmpbf::Error> {
    let networks = collect_route_networks(pbf_path)?;
    debug!("{} ways belong to walking routes", networks.len());

    let reader = ElementReader::from_path(pbf_path)?;
    let mut valid_node_ids = HashSet::new();
    let mut valid_way_ids = HashSet::<i64>::new();

    reader.for_each(|element| {
        if let Element::Way(w) = element {
            let way = OsmWay::from_tags(w.id(), w.tags());
            if encoder.accept(&way).can_skip() {
                return;
            }

            valid_way_ids.insert(w.id());
            valid_node_ids.extend(w.refs());
        }
    })?;

    let reader = ElementReader::from_path(pbf_path)?;
    reader.for_each(|element| match element {
        Element::DenseNode(n) if valid_node_ids.contains(&n.id()) => {
            let elevation = n
                .tags()
                .find(|tag| tag.0 == "ele")
                .and_then(|tag| parse_elevation(tag.1));
            add_osm_node(g, n.id(), n.lat(), n.lon(), elevation);
        }
        Element::Node(n) if valid_node_ids.contains(&n.id()) => {
            let elevation = n
                .tags()
                .find(|tag| tag.0 == "ele")
                .and_then(|tag| parse_elevation(tag.1));
            add_osm_node(g, n.id(), n.lat(), n.lon(), elevation);
        }
        _ => {}
    })?;

    let reader = ElementReader::from_path(pbf_path)?;
    let mut stats = LoadStats::default();

    reader.for_each(|element| {
        if let Element::Way(w) = element {
            if !valid_way_ids.contains(&w.id()) {
                return;
            }

            let way = OsmWay::from_tags(w.id(), w.tags());
            let network = networks.get(&w.id()).copied().unwrap_or_default();
            let Some(flags) = encoder.encode(&way, network) else {
                return;
            };
            stats.ways += 1;

            let node_ids = w.refs().collect::<Vec<_>>();
            for pair in node_ids.windows(2) {
                if insert_from_osm_ids(g, encoder, &way, pair[0], pair[1], flags) {
                    stats.edges += 1;
                } else {
                    stats.failed += 1;
                }
            }
        }
    })?;

    if stats.failed > 0 {
        warn!(
            "{} of {} edges referenced missing nodes",
            stats.failed,
            stats.edges + stats.failed
        );
    }
    info!(
        "Imported {} edges from {} ways ({} nodes)",
        stats.edges,
        stats.ways,
        g.node_count()
    );

    Ok(stats)
}

/// Best walking network class of every way that is a member of a walking
/// route relation.
fn collect_route_networks(pbf_path: &str) -> Result<HashMap<i64, RouteNetwork>, osmpbf::Error> {
    let reader = ElementReader::from_path(pbf_path)?;
    let mut networks = HashMap::<i64, RouteNetwork>::new();

    reader.for_each(|element| {
        if let Element::Relation(r) = element {
            let Some(network) = route_network(r.tags()) else {
                return;
            };

            for member in r.members() {
                if member.member_type == RelMemberType::Way {
                    networks
                        .entry(member.member_id)
                        .and_modify(|current| *current = (*current).max(network))
                        .or_insert(network);
                }
            }
        }
    })?;

    Ok(networks)
}

/// Network class of a relation, `None` when it is not a walking route.
pub fn route_network<'a, I>(tags: I) -> Option<RouteNetwork>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut is_walking_route = false;
    let mut network = RouteNetwork::Other;

    for (key, value) in tags {
        match key {
            "route" => is_walking_route = WALKING_ROUTES.contains(&value),
            "network" => network = RouteNetwork::from_tag(value),
            _ => {}
        }
    }

    is_walking_route.then_some(network)
}

/// Parses an `ele` tag in metres, e.g. `312`, `312.5 m`.
pub fn parse_elevation(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches('m')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|ele| ele.is_finite())
}

fn osm_eid(id: i64) -> String {
    format!("map#osm#{}", id)
}

fn add_osm_node(g: &mut Graph, id: i64, lat: f64, lon: f64, elevation: Option<f64>) {
    g.add_node(NodeData {
        eid: osm_eid(id),
        lat_lng: LatLng::new(lat, lon),
        elevation,
    });
}

fn insert_from_osm_ids(
    g: &mut Graph,
    encoder: &RunEncoder,
    way: &OsmWay,
    from: i64,
    to: i64,
    flags: EdgeFlags,
) -> bool {
    let Some(&from_id) = g.get_id(&osm_eid(from)) else {
        return false;
    };
    let Some(&to_id) = g.get_id(&osm_eid(to)) else {
        return false;
    };

    let (Some(from_node), Some(to_node)) = (g.get_node(from_id), g.get_node(to_id)) else {
        return false;
    };

    let geometry = PointList::new(vec![from_node.point(), to_node.point()]);
    let mut edge = Edge::new(from_id, to_id, way.id(), geometry, flags);
    encoder.apply_way_tags(way, &mut edge);

    g.add_edge(edge).is_ok()
}
