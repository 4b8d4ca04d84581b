use std::fmt::Display;

/// How desirable an edge is for running, from worst to best.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityLevel {
    Worst = 0,
    AvoidAtAllCosts = 1,
    ReachDest = 2,
    AvoidIfPossible = 3,
    Unchanged = 4,
    Prefer = 5,
    VeryNice = 6,
    Best = 7,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 8] = [
        PriorityLevel::Worst,
        PriorityLevel::AvoidAtAllCosts,
        PriorityLevel::ReachDest,
        PriorityLevel::AvoidIfPossible,
        PriorityLevel::Unchanged,
        PriorityLevel::Prefer,
        PriorityLevel::VeryNice,
        PriorityLevel::Best,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<PriorityLevel> {
        PriorityLevel::ALL.get(code as usize).copied()
    }

    /// Multiplier in [0, 1] read by priority-aware weightings.
    pub fn factor(self) -> f64 {
        self.code() as f64 / PriorityLevel::Best.code() as f64
    }

    pub fn name(self) -> &'static str {
        match self {
            PriorityLevel::Worst => "worst",
            PriorityLevel::AvoidAtAllCosts => "avoid_at_all_costs",
            PriorityLevel::ReachDest => "reach_dest",
            PriorityLevel::AvoidIfPossible => "avoid_if_possible",
            PriorityLevel::Unchanged => "unchanged",
            PriorityLevel::Prefer => "prefer",
            PriorityLevel::VeryNice => "very_nice",
            PriorityLevel::Best => "best",
        }
    }
}

impl Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_declaration_order() {
        for (i, level) in PriorityLevel::ALL.iter().enumerate() {
            assert_eq!(level.code() as usize, i);
            assert_eq!(PriorityLevel::from_code(i as u8), Some(*level));
        }
        assert_eq!(PriorityLevel::from_code(8), None);
    }

    #[test]
    fn test_ordering_and_factor() {
        assert!(PriorityLevel::Worst < PriorityLevel::ReachDest);
        assert!(PriorityLevel::Prefer < PriorityLevel::Best);
        assert_eq!(PriorityLevel::Best.factor(), 1.0);
        assert_eq!(PriorityLevel::Worst.factor(), 0.0);
        assert_eq!(PriorityLevel::VeryNice.to_string(), "very_nice");
    }
}
