use crate::pool::{SimTask, WorkerPool, default_worker_count};
use decksim_core::{
    CardTable, Combo, CompiledCombo, Deck, Fingerprint, ResultCache, count_by_id,
};
use tracing::debug;

/// One simulation request, already parsed.
#[derive(Debug, Clone)]
pub struct SimRequest {
    pub deck: Deck,
    pub combo: Combo,
    pub hand_size: usize,
    /// Must be positive.
    pub trials: u64,
    /// When set, a request whose fingerprint matches the previous one is
    /// skipped entirely (the auto-simulate path).
    pub skip_if_unchanged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimOutcome {
    /// Fingerprint matched the previous request; nothing ran.
    Unchanged,
    /// Served from the result cache.
    Cached(f64),
    /// Freshly simulated.
    Fresh(f64),
}

impl SimOutcome {
    pub fn probability(self) -> Option<f64> {
        match self {
            SimOutcome::Unchanged => None,
            SimOutcome::Cached(probability) | SimOutcome::Fresh(probability) => Some(probability),
        }
    }
}

/// One logical simulation session.
///
/// Owns the worker pool, the result cache, and the previous request's
/// fingerprint. All of it is single-owner state touched only by the
/// orchestrating thread; no locks.
#[derive(Debug)]
pub struct Session {
    pool: WorkerPool,
    cache: ResultCache,
    last_fingerprint: Option<Fingerprint>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_workers(default_worker_count())
    }

    pub fn with_workers(workers: usize) -> Self {
        Self {
            pool: WorkerPool::new(workers),
            cache: ResultCache::default(),
            last_fingerprint: None,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.pool.worker_count()
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Runs one request: fingerprint, change detection, cache lookup, and on
    /// a miss the full intern/scatter/gather path.
    pub fn simulate(&mut self, request: &SimRequest) -> SimOutcome {
        debug_assert!(request.trials > 0, "trials must be positive");
        let fingerprint = Fingerprint::compute(
            &request.deck,
            &request.combo,
            request.hand_size,
            request.trials,
        );
        if request.skip_if_unchanged && self.last_fingerprint.as_ref() == Some(&fingerprint) {
            debug!("input unchanged, skipping simulation");
            return SimOutcome::Unchanged;
        }
        self.last_fingerprint = Some(fingerprint.clone());
        if let Some(probability) = self.cache.get(&fingerprint) {
            debug!(probability, "result cache hit");
            return SimOutcome::Cached(probability);
        }

        let mut table = CardTable::new();
        let deck = request.deck.intern(&mut table);
        let combo = CompiledCombo::compile(&request.combo, &mut table);
        let deck_counts = count_by_id(&deck, table.len());
        let successes = self.pool.run(&SimTask {
            deck,
            deck_counts,
            combo,
            hand_size: request.hand_size,
            trials: request.trials,
        });
        let probability = successes as f64 / request.trials as f64;
        debug!(probability, successes, "simulation complete");
        self.cache.set(fingerprint, probability);
        SimOutcome::Fresh(probability)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
