//! Allocation counting for the harness memory column.
//!
//! [`CountingAllocator`] forwards to the system allocator and adds every
//! requested size to a process-wide counter. It only takes effect when a
//! binary installs it:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: telemetry_select_core::CountingAllocator =
//!     telemetry_select_core::CountingAllocator;
//! ```
//!
//! Without it, [`allocated_bytes`] returns `None` and reports leave the
//! memory column empty.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static ALLOCATED: AtomicU64 = AtomicU64::new(0);
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// System allocator wrapper that counts allocated bytes.
pub struct CountingAllocator;

#[inline]
fn record(bytes: usize) {
    ALLOCATED.fetch_add(bytes as u64, Ordering::Relaxed);
    INSTALLED.store(true, Ordering::Relaxed);
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record(layout.size());
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    // A realloc counts as a fresh allocation of the new size.
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record(new_size);
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

/// Total bytes allocated so far, or `None` if [`CountingAllocator`] is not
/// the global allocator.
pub fn allocated_bytes() -> Option<u64> {
    if INSTALLED.load(Ordering::Relaxed) {
        Some(ALLOCATED.load(Ordering::Relaxed))
    } else {
        None
    }
}

/// Counter reading taken before a measured batch.
#[derive(Debug, Clone, Copy)]
pub struct AllocSnapshot(Option<u64>);

impl AllocSnapshot {
    pub fn take() -> Self {
        Self(allocated_bytes())
    }

    /// Bytes allocated per operation since this snapshot.
    pub fn per_op_since(self, ops: usize) -> Option<u64> {
        per_op(self.0, allocated_bytes(), ops)
    }
}

fn per_op(before: Option<u64>, after: Option<u64>, ops: usize) -> Option<u64> {
    match (before, after) {
        (Some(b), Some(a)) if ops > 0 => Some(a.saturating_sub(b) / ops as u64),
        _ => None,
    }
}
