//! Userspace heap backed by the page allocation traps.
//!
//! A bump allocator over page-granular grabs from the kernel: it requests
//! chunks of pages, carves allocations out of the current chunk, and never
//! frees. Memory is reclaimed wholesale when the process exits.

use core::alloc::{GlobalAlloc, Layout};
use core::ptr;

use spinning_top::Spinlock;

use crate::gateway::KernelGateway;
use crate::sys;

const PAGE_SIZE: usize = 4096;

/// Pages requested per refill. Allocations larger than a chunk get an
/// exact grab of their own.
const CHUNK_PAGES: usize = 16;

struct Region {
    next: usize,
    end: usize,
}

/// Bump allocator over kernel page grabs.
///
/// Deallocation is a no-op; a process that churns allocations will grow
/// until exit. Good enough for the clients this library serves.
pub struct PageAllocator {
    region: Spinlock<Region>,
}

impl PageAllocator {
    pub const fn new() -> Self {
        Self {
            region: Spinlock::new(Region { next: 0, end: 0 }),
        }
    }

    fn grab(pages: usize) -> usize {
        let status = sys::proc::allocate_pages(&KernelGateway, pages);
        if status < 0 {
            0
        } else {
            status as usize
        }
    }
}

unsafe impl GlobalAlloc for PageAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // Page alignment is the most the kernel hands out.
        if layout.align() > PAGE_SIZE {
            return ptr::null_mut();
        }

        let mut region = self.region.lock();

        let aligned = (region.next + layout.align() - 1) & !(layout.align() - 1);
        if aligned + layout.size() <= region.end && region.next != 0 {
            region.next = aligned + layout.size();
            return aligned as *mut u8;
        }

        let pages = layout.size().div_ceil(PAGE_SIZE).max(CHUNK_PAGES);
        let base = Self::grab(pages);
        if base == 0 {
            return ptr::null_mut();
        }

        // Pages come back page-aligned, which satisfies any align <= PAGE_SIZE.
        region.next = base + layout.size();
        region.end = base + pages * PAGE_SIZE;
        base as *mut u8
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {
        // Nothing tracks individual allocations, so nothing to free here.
        // FreePages exists for callers managing whole regions themselves.
    }
}

#[global_allocator]
static ALLOCATOR: PageAllocator = PageAllocator::new();
