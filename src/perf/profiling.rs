/// Function call counters for profiling the meshing and raster paths.
/// Incremented through `count_call!`/`count_add!`, which compile to nothing
/// unless the `profiling` feature is enabled.
use std::sync::atomic::{AtomicU64, Ordering};

pub struct FunctionCounters {
    // Meshing counters
    pub mesh_chunk_calls: AtomicU64,
    pub is_solid_queries: AtomicU64,

    // Rasterization counters
    pub faces_submitted: AtomicU64,
    pub faces_clip_rejected: AtomicU64,
    pub triangles_culled: AtomicU64,
    pub triangles_rasterized: AtomicU64,
    pub depth_tests: AtomicU64,
    pub depth_tests_passed: AtomicU64,

    // Frame counters
    pub frame_clears: AtomicU64,
}

impl FunctionCounters {
    pub const fn new() -> Self {
        Self {
            mesh_chunk_calls: AtomicU64::new(0),
            is_solid_queries: AtomicU64::new(0),
            faces_submitted: AtomicU64::new(0),
            faces_clip_rejected: AtomicU64::new(0),
            triangles_culled: AtomicU64::new(0),
            triangles_rasterized: AtomicU64::new(0),
            depth_tests: AtomicU64::new(0),
            depth_tests_passed: AtomicU64::new(0),
            frame_clears: AtomicU64::new(0),
        }
    }

    fn all(&self) -> [&AtomicU64; 9] {
        [
            &self.mesh_chunk_calls,
            &self.is_solid_queries,
            &self.faces_submitted,
            &self.faces_clip_rejected,
            &self.triangles_culled,
            &self.triangles_rasterized,
            &self.depth_tests,
            &self.depth_tests_passed,
            &self.frame_clears,
        ]
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        for counter in self.all() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        CounterSnapshot {
            mesh_chunk_calls: load(&self.mesh_chunk_calls),
            is_solid_queries: load(&self.is_solid_queries),
            faces_submitted: load(&self.faces_submitted),
            faces_clip_rejected: load(&self.faces_clip_rejected),
            triangles_culled: load(&self.triangles_culled),
            triangles_rasterized: load(&self.triangles_rasterized),
            depth_tests: load(&self.depth_tests),
            depth_tests_passed: load(&self.depth_tests_passed),
            frame_clears: load(&self.frame_clears),
        }
    }
}

impl Default for FunctionCounters {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub mesh_chunk_calls: u64,
    pub is_solid_queries: u64,
    pub faces_submitted: u64,
    pub faces_clip_rejected: u64,
    pub triangles_culled: u64,
    pub triangles_rasterized: u64,
    pub depth_tests: u64,
    pub depth_tests_passed: u64,
    pub frame_clears: u64,
}

impl CounterSnapshot {
    /// Log a formatted report at info level
    pub fn log_report(&self) {
        log::info!("=== Performance Counters ===");
        log::info!("  mesh_chunk calls:      {:12}", self.mesh_chunk_calls);
        log::info!("  is_solid queries:      {:12}", self.is_solid_queries);
        log::info!("  faces submitted:       {:12}", self.faces_submitted);
        log::info!("  faces clip-rejected:   {:12}", self.faces_clip_rejected);
        log::info!("  triangles culled:      {:12}", self.triangles_culled);
        log::info!("  triangles rasterized:  {:12}", self.triangles_rasterized);
        log::info!("  depth tests:           {:12}", self.depth_tests);
        log::info!("  depth tests passed:    {:12}", self.depth_tests_passed);
        if self.depth_tests > 0 {
            let pass_rate = self.depth_tests_passed as f64 / self.depth_tests as f64 * 100.0;
            log::info!("  depth pass rate:       {:11.2}%", pass_rate);
        }
        log::info!("  frame clears:          {:12}", self.frame_clears);
    }
}

/// Global function counters instance
pub static FUNCTION_COUNTERS: FunctionCounters = FunctionCounters::new();

/// Increment a counter (only when the profiling feature is enabled)
#[macro_export]
macro_rules! count_call {
    ($counter:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

/// Add to a counter (only when the profiling feature is enabled)
#[macro_export]
macro_rules! count_add {
    ($counter:expr, $value:expr) => {
        #[cfg(feature = "profiling")]
        {
            $counter.fetch_add($value, std::sync::atomic::Ordering::Relaxed);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_every_counter() {
        let counters = FunctionCounters::new();
        counters.faces_submitted.fetch_add(3, Ordering::Relaxed);
        counters.frame_clears.fetch_add(1, Ordering::Relaxed);
        assert_eq!(counters.snapshot().faces_submitted, 3);

        counters.reset();
        assert_eq!(counters.snapshot(), CounterSnapshot::default());
    }
}
