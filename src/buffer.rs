//! Owned byte buffers for one benchmark iteration.
//!
//! Every buffer the harness touches comes from a [`BufferAllocator`]. The
//! returned [`OwnedBuffer`] has a fixed capacity decided at allocation time
//! (zero-filled, so no uninitialised bytes are ever handed to a codec) and a
//! logical length set after the codec reports how much it wrote.
//!
//! Release is by `Drop`. When the second of two allocations in one iteration
//! fails, the first buffer is dropped as the `?` unwinds the frame, so there
//! is no failure-path bookkeeping.

use crate::error::{AllocationError, CodecError};
use crate::codec::CodecKind;

// ── OwnedBuffer ───────────────────────────────────────────────────────────────

/// Exclusively owned, fixed-capacity byte buffer.
#[derive(Debug)]
pub struct OwnedBuffer {
    data: Vec<u8>,
    len: usize,
}

impl OwnedBuffer {
    /// Total writable bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Logical length: bytes filled by the last producer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The filled prefix `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The whole writable region `[0, capacity)`, for codecs and readers to fill.
    #[inline]
    pub fn capacity_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Record that `len` bytes were produced by `codec`.
    ///
    /// A length beyond capacity means the producer lied about what it wrote;
    /// that is reported as an overflow rather than clamped.
    pub fn set_len(&mut self, len: usize, codec: CodecKind) -> Result<(), CodecError> {
        if len > self.data.len() {
            return Err(CodecError::OutputOverflow { codec, capacity: self.data.len() });
        }
        self.len = len;
        Ok(())
    }

    /// Mark the whole capacity as filled (used after a `read_exact` into it).
    #[inline]
    pub fn fill_to_capacity(&mut self) {
        self.len = self.data.len();
    }
}

// ── Allocators ────────────────────────────────────────────────────────────────

/// Source of iteration buffers.
///
/// The harness owns one allocator for the whole run; tests substitute a
/// failing implementation to exercise abort paths.
pub trait BufferAllocator {
    /// Allocate a zero-filled buffer of exactly `size` bytes.
    ///
    /// # Errors
    /// [`AllocationError::ZeroSize`] when `size == 0`,
    /// [`AllocationError::OutOfMemory`] when the memory cannot be reserved.
    fn allocate(&mut self, size: usize) -> Result<OwnedBuffer, AllocationError>;
}

/// Heap allocator backed by `Vec::try_reserve_exact`, so an impossible
/// request becomes an error value instead of a process abort.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl BufferAllocator for HeapAllocator {
    fn allocate(&mut self, size: usize) -> Result<OwnedBuffer, AllocationError> {
        if size == 0 {
            return Err(AllocationError::ZeroSize);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| AllocationError::OutOfMemory { requested: size })?;
        data.resize(size, 0);
        Ok(OwnedBuffer { data, len: 0 })
    }
}

impl<A: BufferAllocator + ?Sized> BufferAllocator for &mut A {
    fn allocate(&mut self, size: usize) -> Result<OwnedBuffer, AllocationError> {
        (**self).allocate(size)
    }
}

impl<A: BufferAllocator + ?Sized> BufferAllocator for Box<A> {
    fn allocate(&mut self, size: usize) -> Result<OwnedBuffer, AllocationError> {
        (**self).allocate(size)
    }
}
