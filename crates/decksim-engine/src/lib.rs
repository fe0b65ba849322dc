pub mod pool;
pub mod session;

pub use pool::{Dispatch, SimTask, WorkerPool, default_worker_count};
pub use session::{Session, SimOutcome, SimRequest};
