//! Peak-allocation tracing for memory probes
//!
//! [`TracingAllocator`] is a counting wrapper around the system allocator;
//! it tracks live-allocated bytes and the high-water mark, but only while a
//! probe is active, so the measured passes that are *timed* run untraced.
//!
//! Tracing is scoped by [`AllocProbe`] with RAII semantics: counters are
//! reset on acquire and tracing is always disabled on drop, so a failed
//! round never leaves instrumentation active for the next one. At most one
//! probe can be active at a time; acquisition serializes.
//!
//! The harness binary (and any test binary probing allocation) must install
//! the wrapper:
//!
//! ```rust,ignore
//! #[global_allocator]
//! static ALLOC: TracingAllocator = TracingAllocator;
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

static TRACING: AtomicBool = AtomicBool::new(false);
static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Serializes probe acquisition; the guard lives inside [`AllocProbe`].
static PROBE_LOCK: Mutex<()> = Mutex::new(());

/// Counting wrapper around [`System`]. Counters only move while a probe is
/// active; outside a probe every call is a plain pass-through.
pub struct TracingAllocator;

unsafe impl GlobalAlloc for TracingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && TRACING.load(Ordering::Relaxed) {
            let live = LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        if TRACING.load(Ordering::Relaxed) {
            // Frees of blocks allocated before the probe began must not
            // underflow the live counter.
            let size = layout.size();
            let _ = LIVE_BYTES.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |live| {
                Some(live.saturating_sub(size))
            });
        }
    }
}

/// RAII scope for one traced pass.
///
/// Resets the counters and enables tracing on acquire; disables tracing on
/// drop, including unwind and error paths.
pub struct AllocProbe {
    _lock: MutexGuard<'static, ()>,
}

impl AllocProbe {
    /// Reset allocation-trace state and begin tracing.
    ///
    /// Blocks until any other active probe has been released.
    pub fn start() -> Self {
        let lock = PROBE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        LIVE_BYTES.store(0, Ordering::Relaxed);
        PEAK_BYTES.store(0, Ordering::Relaxed);
        TRACING.store(true, Ordering::Relaxed);
        Self { _lock: lock }
    }

    /// Peak live-allocated bytes observed so far in this probe.
    pub fn peak_bytes(&self) -> usize {
        PEAK_BYTES.load(Ordering::Relaxed)
    }

    /// Stop tracing and return the observed peak.
    pub fn finish(self) -> usize {
        let peak = PEAK_BYTES.load(Ordering::Relaxed);
        drop(self);
        peak
    }
}

impl Drop for AllocProbe {
    fn drop(&mut self) {
        TRACING.store(false, Ordering::Relaxed);
    }
}

/// Whether a probe is currently tracing allocations.
pub fn probe_active() -> bool {
    TRACING.load(Ordering::Relaxed)
}
