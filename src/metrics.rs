//! Performance counters and timing for sorting runs

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::Path;
use std::time::{Duration, Instant};

/// Header written to a metrics CSV file when it is created or still empty
const CSV_HEADER: &str =
    "ArraySize,DataType,Comparisons,Swaps,ArrayAccesses,MemoryAllocations,TimeNanos,TimeMillis";

/// Collects operation counts and wall time for a single sorting run
///
/// Each [`crate::sorter::InsertionSorter`] owns one collector. The sorter
/// resets it at the start of every run, so a snapshot always describes the
/// most recent call. Counters only ever increase between resets.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    memory_allocations: u64,
    start: Option<Instant>,
    end: Option<Instant>,
    timing: bool,
}

impl MetricsCollector {
    /// Create a collector with all counters at zero and no timing state
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and clear the timing state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the current monotonic instant as the start of a timed section
    ///
    /// Calling this again before [`Self::stop_timing`] overwrites the start
    /// instant.
    pub fn start_timing(&mut self) {
        self.start = Some(Instant::now());
        self.timing = true;
    }

    /// Record the end of a timed section
    ///
    /// A no-op unless timing is active, so a repeated stop keeps the end
    /// instant of the pair that actually completed.
    pub fn stop_timing(&mut self) {
        if self.timing {
            self.end = Some(Instant::now());
            self.timing = false;
        }
    }

    /// Count one element comparison
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Count `count` element comparisons
    pub fn record_comparisons(&mut self, count: u64) {
        self.comparisons += count;
    }

    /// Count one element move into a new slot
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Count `count` element moves
    pub fn record_swaps(&mut self, count: u64) {
        self.swaps += count;
    }

    /// Count one indexed read or write of a sequence element
    pub fn record_array_access(&mut self) {
        self.array_accesses += 1;
    }

    /// Count `count` indexed reads or writes, e.g. for a bulk shift
    pub fn record_array_accesses(&mut self, count: u64) {
        self.array_accesses += count;
    }

    /// Count one buffer allocation
    pub fn record_memory_allocation(&mut self) {
        self.memory_allocations += 1;
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    pub fn memory_allocations(&self) -> u64 {
        self.memory_allocations
    }

    /// Wall time between the recorded start and end instants
    ///
    /// Reads as zero until at least one start/stop pair has completed.
    /// Restarting without stopping also reads zero, since the preserved end
    /// instant cannot be later than the new start on a monotonic clock.
    pub fn elapsed(&self) -> Duration {
        match (self.start, self.end) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Elapsed wall time in nanoseconds
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// Elapsed wall time in milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    /// Elapsed wall time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Single line summary of all counters and the elapsed time
    pub fn compact(&self) -> String {
        format!(
            "comp={}, swaps={}, acc={}, alloc={}, time={:.3}ms",
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.memory_allocations,
            self.elapsed_millis(),
        )
    }

    /// Append this snapshot as one CSV row to `path`
    ///
    /// The header line is written only when the file is newly created or
    /// empty, so repeated exports into the same file stay parseable.
    pub fn export_csv(
        &self,
        path: impl AsRef<Path>,
        array_size: usize,
        data_type: &str,
    ) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())?;

        if file.metadata()?.len() == 0 {
            writeln!(file, "{CSV_HEADER}")?;
        }

        writeln!(
            file,
            "{},{},{},{},{},{},{},{:.6}",
            array_size,
            data_type,
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.memory_allocations,
            self.elapsed_nanos(),
            self.elapsed_millis(),
        )
    }
}

impl fmt::Display for MetricsCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance metrics:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps: {}", self.swaps)?;
        writeln!(f, "  Array accesses: {}", self.array_accesses)?;
        writeln!(f, "  Memory allocations: {}", self.memory_allocations)?;
        write!(
            f,
            "  Elapsed: {:.6} ms ({:.2} µs)",
            self.elapsed_millis(),
            self.elapsed_nanos() as f64 / 1_000.0,
        )
    }
}
