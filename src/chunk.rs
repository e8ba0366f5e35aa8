//! The chunk list: singly linked backing regions, newest first.

use core::{
    alloc::Layout,
    mem::{align_of, size_of},
    ptr::{self, NonNull},
};

use allocator_api2::alloc::{AllocError, Allocator};

use crate::align::{align_up, align_up_mask, is_aligned_to};

/// Header living at the front of every backing region. Object data begins
/// right after it and runs up to `limit`.
#[repr(C)]
pub(crate) struct ChunkHeader {
    /// One past the last usable byte of this chunk.
    limit: *mut u8,

    /// The previously current chunk, or `None` for the oldest.
    prev: Option<NonNull<ChunkHeader>>,
}

impl ChunkHeader {
    /// Allocates and initializes a chunk of `size` bytes, header included.
    #[inline]
    pub(crate) fn alloc_chunk(
        size: usize,
        allocator: &impl Allocator,
        prev: Option<NonNull<Self>>,
    ) -> Result<NonNull<Self>, AllocError> {
        let size = size.max(size_of::<Self>() + align_of::<Self>());
        let size = align_up(size, align_of::<Self>()).ok_or(AllocError)?;

        // Safety:
        // size + (align - 1) hasn't overflow above.
        // `align_of` returns valid align value.
        let layout = unsafe { Layout::from_size_align_unchecked(size, align_of::<Self>()) };
        let slice = allocator.allocate(layout)?;

        // Safety: freshly allocated block of at least `size` bytes.
        Ok(unsafe { Self::init_chunk(slice, prev) })
    }

    /// # Safety
    ///
    /// `slice` must be a live allocation, aligned for `ChunkHeader` and
    /// larger than the header.
    #[inline]
    unsafe fn init_chunk(slice: NonNull<[u8]>, prev: Option<NonNull<Self>>) -> NonNull<Self> {
        let len = slice.len();
        let ptr = slice.as_ptr().cast::<u8>();
        debug_assert!(is_aligned_to(sptr::Strict::addr(ptr), align_of::<Self>()));
        debug_assert!(len > size_of::<Self>());

        let limit = ptr.add(len);
        let header_ptr = ptr.cast::<Self>();
        ptr::write(header_ptr, ChunkHeader { limit, prev });
        NonNull::new_unchecked(header_ptr)
    }

    /// Returns the chunk to `allocator` and hands back its predecessor.
    ///
    /// # Safety
    ///
    /// `chunk` must be a live chunk allocated from `allocator`. It must not
    /// be reachable from any chunk list afterwards.
    #[inline]
    pub(crate) unsafe fn dealloc_chunk(
        chunk: NonNull<Self>,
        allocator: &impl Allocator,
    ) -> Option<NonNull<Self>> {
        let me = chunk.as_ref();
        let prev = me.prev;

        let size = me.limit.offset_from(chunk.as_ptr().cast::<u8>()) as usize;

        // Safety:
        // Making layout of actual allocation.
        let layout = Layout::from_size_align_unchecked(size, align_of::<Self>());

        allocator.deallocate(chunk.cast(), layout);
        prev
    }

    /// First address where object data may be stored, before alignment.
    ///
    /// # Safety
    ///
    /// `chunk` must be a live chunk.
    #[inline(always)]
    pub(crate) unsafe fn contents(chunk: NonNull<Self>) -> *mut u8 {
        chunk.as_ptr().add(1).cast::<u8>()
    }

    /// First address where an object may begin under `align_mask`.
    ///
    /// # Safety
    ///
    /// `chunk` must be a live chunk, sized so that the aligned address does
    /// not pass `limit`. Chunk sizing in `ObjectStack` guarantees this.
    #[inline(always)]
    pub(crate) unsafe fn aligned_start(chunk: NonNull<Self>, align_mask: usize) -> *mut u8 {
        let contents = Self::contents(chunk);
        let addr = sptr::Strict::addr(contents);
        let aligned = align_up_mask(addr, align_mask).unwrap_or(addr);
        contents.add(aligned - addr)
    }

    #[inline(always)]
    pub(crate) fn limit(&self) -> *mut u8 {
        self.limit
    }

    #[inline(always)]
    pub(crate) fn prev(&self) -> Option<NonNull<ChunkHeader>> {
        self.prev
    }

    /// Unlinks and returns the predecessor.
    ///
    /// # Safety
    ///
    /// `chunk` must be a live chunk.
    #[inline(always)]
    pub(crate) unsafe fn take_prev(chunk: NonNull<Self>) -> Option<NonNull<Self>> {
        (*chunk.as_ptr()).prev.take()
    }

    /// Replaces the predecessor link.
    ///
    /// # Safety
    ///
    /// `chunk` must be a live chunk.
    #[inline(always)]
    pub(crate) unsafe fn set_prev(chunk: NonNull<Self>, prev: Option<NonNull<Self>>) {
        (*chunk.as_ptr()).prev = prev;
    }
}
