//! Ring buffer sink

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Bounded in-memory log
///
/// When full, a new record evicts the oldest one (FIFO).
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        })
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut inner) = self.inner.lock() {
            if inner.len() >= self.capacity {
                inner.pop_front();
            }
            inner.push_back(record);
        }
    }

    /// All held records, oldest first
    pub fn dump_records(&self) -> Vec<Record> {
        match self.inner.lock() {
            Ok(inner) => inner.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Held records formatted one per line
    pub fn dump(&self) -> String {
        self.dump_records()
            .iter()
            .map(|r| r.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}
