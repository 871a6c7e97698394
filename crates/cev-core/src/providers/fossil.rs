//! Synthetic fossil record.
//!
//! Two independent monthly Bernoulli processes (speciation and extinction)
//! drawn once at construction with a seeded generator. The draw is frozen
//! for the provider's lifetime so repeated queries over the same range
//! return identical events.

use super::{month_ends, EventProvider};
use cev_common::{DateRange, EvolutionaryEvent, EvolutionaryEventKind};
use cev_config::ProcessParams;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Precomputed speciation and extinction events.
#[derive(Debug, Clone)]
pub struct FossilRecord {
    events: Vec<EvolutionaryEvent>,
}

impl FossilRecord {
    /// Generate the record over `[start, end]` with a seeded generator.
    ///
    /// All speciation months are drawn first, then all extinction months,
    /// so the stored list is two chronological blocks rather than one
    /// globally sorted sequence.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        speciation: &ProcessParams,
        extinction: &ProcessParams,
        seed: u64,
    ) -> Self {
        let months = month_ends(start, end);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut events = Vec::new();

        for &date in &months {
            if rng.random::<f64>() < speciation.monthly_probability {
                events.push(draw_event(
                    &mut rng,
                    date,
                    EvolutionaryEventKind::Speciation,
                    speciation,
                ));
            }
        }
        for &date in &months {
            if rng.random::<f64>() < extinction.monthly_probability {
                events.push(draw_event(
                    &mut rng,
                    date,
                    EvolutionaryEventKind::Extinction,
                    extinction,
                ));
            }
        }

        FossilRecord { events }
    }

    /// Total number of precomputed events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventProvider for FossilRecord {
    fn events_in(
        &self,
        range: &DateRange,
        kind: Option<EvolutionaryEventKind>,
    ) -> Vec<EvolutionaryEvent> {
        self.events
            .iter()
            .filter(|e| range.contains(e.timestamp))
            .filter(|e| kind.map_or(true, |k| e.kind == k))
            .cloned()
            .collect()
    }
}

fn draw_event(
    rng: &mut StdRng,
    date: NaiveDate,
    kind: EvolutionaryEventKind,
    params: &ProcessParams,
) -> EvolutionaryEvent {
    let magnitude = rng.random_range(params.magnitude_min..params.magnitude_max);
    let num_taxa = rng.random_range(1..=params.max_taxa) as usize;
    let (prefix, label) = match kind {
        EvolutionaryEventKind::Speciation => ("Taxus", "Speciation"),
        EvolutionaryEventKind::Extinction => ("Extinctus", "Extinction"),
    };
    let affected_taxa = (0..num_taxa).map(|i| format!("{}_{}", prefix, i)).collect();
    EvolutionaryEvent {
        timestamp: date,
        kind,
        magnitude,
        affected_taxa,
        description: format!("{} event affecting {} taxa", label, num_taxa),
    }
}
