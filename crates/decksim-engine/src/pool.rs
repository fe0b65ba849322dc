//! Fixed pool of trial workers with generation-tagged scatter/gather.
//!
//! Workers share no mutable state: each job carries its own copy of the
//! interned deck and combo, and each worker owns its scratch buffers. The
//! only cross-thread traffic is the job dispatch and the one-shot result
//! report. Cancellation is implicit: a new dispatch supersedes any
//! uncollected one, and reports tagged with an older generation are dropped
//! at the gather barrier rather than the workers being interrupted.

use decksim_core::{CardId, CompiledCombo, TrialRunner, split_trials};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Interned inputs for one simulation; every worker gets its own copy.
#[derive(Debug, Clone)]
pub struct SimTask {
    pub deck: Vec<CardId>,
    pub deck_counts: Vec<u32>,
    pub combo: CompiledCombo,
    pub hand_size: usize,
    pub trials: u64,
}

#[derive(Debug)]
struct Job {
    generation: u64,
    deck: Vec<CardId>,
    deck_counts: Vec<u32>,
    combo: CompiledCombo,
    hand_size: usize,
    trials: u64,
}

#[derive(Debug)]
struct Report {
    generation: u64,
    successes: u64,
}

/// Receipt for a scattered dispatch, redeemed by [`WorkerPool::collect`].
#[derive(Debug)]
#[must_use = "collect the dispatch to aggregate its results"]
pub struct Dispatch {
    generation: u64,
    workers: usize,
    trials: u64,
}

impl Dispatch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }
}

/// Worker count hint: hardware parallelism minus one for the orchestrating
/// thread, never below one.
pub fn default_worker_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        .saturating_sub(1)
        .max(1)
}

/// Fixed-size pool of trial-running threads.
#[derive(Debug)]
pub struct WorkerPool {
    job_txs: Vec<Sender<Job>>,
    report_rx: Receiver<Report>,
    handles: Vec<JoinHandle<()>>,
    generation: u64,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        assert!(workers >= 1, "pool needs at least one worker");
        let (report_tx, report_rx) = mpsc::channel();
        let mut job_txs = Vec::with_capacity(workers);
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let (job_tx, job_rx) = mpsc::channel();
            let report_tx = report_tx.clone();
            handles.push(thread::spawn(move || worker_loop(job_rx, report_tx)));
            job_txs.push(job_tx);
        }
        Self {
            job_txs,
            report_rx,
            handles,
            generation: 0,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.job_txs.len()
    }

    /// Scatters `task` across the pool under a fresh generation number,
    /// superseding any dispatch not yet collected. Shares sum to
    /// `task.trials` exactly; the remainder lands on worker 0.
    pub fn dispatch(&mut self, task: &SimTask) -> Dispatch {
        self.generation += 1;
        let generation = self.generation;
        let shares = split_trials(task.trials, self.worker_count());
        debug!(
            generation,
            trials = task.trials,
            workers = self.worker_count(),
            "dispatching simulation"
        );
        for (job_tx, &share) in self.job_txs.iter().zip(&shares) {
            let job = Job {
                generation,
                deck: task.deck.clone(),
                deck_counts: task.deck_counts.clone(),
                combo: task.combo.clone(),
                hand_size: task.hand_size,
                trials: share,
            };
            job_tx.send(job).expect("worker thread terminated");
        }
        Dispatch {
            generation,
            workers: self.worker_count(),
            trials: task.trials,
        }
    }

    /// Gathers exactly one report per dispatched worker and returns the
    /// summed success count. Reports tagged with a superseded generation are
    /// dropped, never aggregated.
    pub fn collect(&mut self, dispatch: Dispatch) -> u64 {
        let mut successes = 0;
        let mut remaining = dispatch.workers;
        while remaining > 0 {
            let report = self.report_rx.recv().expect("worker thread terminated");
            if report.generation != dispatch.generation {
                debug!(
                    stale = report.generation,
                    current = dispatch.generation,
                    "dropping stale worker report"
                );
                continue;
            }
            successes += report.successes;
            remaining -= 1;
        }
        successes
    }

    /// Dispatch and collect in one step.
    pub fn run(&mut self, task: &SimTask) -> u64 {
        let dispatch = self.dispatch(task);
        self.collect(dispatch)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the job channels ends every worker loop.
        self.job_txs.clear();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

fn worker_loop(jobs: Receiver<Job>, reports: Sender<Report>) {
    while let Ok(job) = jobs.recv() {
        let mut runner = TrialRunner::new(job.deck, job.deck_counts, job.combo, job.hand_size);
        let successes = runner.run(job.trials);
        let report = Report {
            generation: job.generation,
            successes,
        };
        if reports.send(report).is_err() {
            break;
        }
    }
}
