use medica_vision::Pipeline;
use std::sync::Arc;

use crate::error::StatusPolicy;

pub type AppState = Arc<State>;

/// Default upload limit, 10 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Shared, read-only request context. Nothing here changes after startup,
/// so handlers access it without locks.
#[derive(Debug)]
pub struct State {
    pub pipeline: Pipeline,
    pub status_policy: StatusPolicy,
    pub body_limit: usize,
}

impl State {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            status_policy: StatusPolicy::default(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}
