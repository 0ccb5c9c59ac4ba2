#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of ids for newly created columns and cards.
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix>-<n>` ids starting at 1.
#[derive(Debug)]
pub struct SequentialIdProvider {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
