//! Residual-value schedule for lease projections

/// Residual rate as a step function of lease term
///
/// Each step is `(max_term_months, rate)`. A term longer than every step
/// falls through to the floor rate. This is a simplified stand-in for a
/// dealer residual-value table and is intended to be replaced per session.
#[derive(Debug, Clone)]
pub struct ResidualSchedule {
    steps: Vec<(u32, f64)>,
    floor: f64,
}

impl ResidualSchedule {
    /// Default retail schedule: 70% through 24 months, stepping down to a 45% floor
    pub fn default_schedule() -> Self {
        Self {
            steps: vec![(24, 0.70), (36, 0.60), (48, 0.55), (60, 0.50)],
            floor: 0.45,
        }
    }

    /// Create a schedule from custom steps and floor
    ///
    /// Steps are sorted by term so lookups see them in ascending order.
    pub fn from_steps(mut steps: Vec<(u32, f64)>, floor: f64) -> Self {
        steps.sort_by_key(|&(max_term, _)| max_term);
        Self { steps, floor }
    }

    /// Residual rate for a given lease term in months
    pub fn rate_for_term(&self, term: u32) -> f64 {
        self.steps
            .iter()
            .find(|&&(max_term, _)| term <= max_term)
            .map(|&(_, rate)| rate)
            .unwrap_or(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_steps() {
        let schedule = ResidualSchedule::default_schedule();

        assert_eq!(schedule.rate_for_term(12), 0.70);
        assert_eq!(schedule.rate_for_term(24), 0.70);
        assert_eq!(schedule.rate_for_term(25), 0.60);
        assert_eq!(schedule.rate_for_term(36), 0.60);
        assert_eq!(schedule.rate_for_term(48), 0.55);
        assert_eq!(schedule.rate_for_term(60), 0.50);
        assert_eq!(schedule.rate_for_term(72), 0.45);
    }

    #[test]
    fn test_custom_steps_sorted() {
        let schedule = ResidualSchedule::from_steps(vec![(48, 0.50), (24, 0.65)], 0.40);

        assert_eq!(schedule.rate_for_term(20), 0.65);
        assert_eq!(schedule.rate_for_term(40), 0.50);
        assert_eq!(schedule.rate_for_term(90), 0.40);
    }
}
