use std::{collections::BTreeMap, fmt::Display};

use crate::{
    encoding::FlagLayout,
    structures::{Graph, PriorityLevel},
};

/// Aggregate view of an encoded graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodingSummary {
    pub edges: usize,
    pub accessible_edges: usize,
    pub priorities: BTreeMap<PriorityLevel, usize>,
    /// Mean speed over accessible edges, km/h.
    pub mean_speed: f64,
}

impl EncodingSummary {
    pub fn from_graph(graph: &Graph, layout: &FlagLayout) -> Self {
        let mut summary = EncodingSummary::default();
        let mut speed_sum = 0.0;

        for edge in graph.edges() {
            summary.edges += 1;
            *summary
                .priorities
                .entry(layout.priority(edge.flags))
                .or_default() += 1;

            if layout.access(edge.flags, false) || layout.access(edge.flags, true) {
                summary.accessible_edges += 1;
                speed_sum += layout.speed(edge.flags);
            }
        }

        if summary.accessible_edges > 0 {
            summary.mean_speed = speed_sum / summary.accessible_edges as f64;
        }
        summary
    }
}

impl Display for EncodingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} edges, {} accessible, mean speed {:.2} km/h",
            self.edges, self.accessible_edges, self.mean_speed
        )?;
        for (priority, count) in &self.priorities {
            writeln!(f, "  {:<20}{}", priority, count)?;
        }
        Ok(())
    }
}
