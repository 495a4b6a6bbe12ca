use crate::config::AppConfig;
use portable_atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// ── Request Counters (lock-free) ──

pub struct RequestCounters {
    pub analyses_computed: AtomicU64,
    pub requests_rejected: AtomicU64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self {
            analyses_computed: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            analyses_computed: self.analyses_computed.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CounterSnapshot {
    pub analyses_computed: u64,
    pub requests_rejected: u64,
}

// ── Application shared state (read-only config + atomics, no locks) ──

pub struct AppState {
    pub config: AppConfig,
    pub counters: RequestCounters,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            counters: RequestCounters::new(),
        })
    }
}
