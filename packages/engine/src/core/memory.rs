//! Linear memory arena
//!
//! Geometry buffers live in one flat, 4-byte aligned byte region so the host
//! can address them with `(pointer, count)` pairs, the same way a page views
//! a wasm instance's `memory.buffer`.
//!
//! Two counters are tracked:
//! - `epoch` changes on [`LinearMemory::reset`]; regions from an older epoch
//!   no longer describe live data and are rejected by [`LinearMemory::view`].
//! - `reallocations` changes whenever the backing store moves. Offsets stay
//!   valid, but absolute pointers handed to JS must be re-queried.

use bytemuck::Pod;

use super::EngineError;

const WORD: usize = std::mem::size_of::<u32>();

/// A `(pointer, count)` pair into [`LinearMemory`]: byte offset, element
/// count and the epoch it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Region {
    pub offset: u32,
    pub len: u32,
    pub epoch: u32,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Default)]
pub struct LinearMemory {
    words: Vec<u32>,
    epoch: u32,
    reallocations: u32,
}

impl LinearMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            words: Vec::with_capacity(bytes.div_ceil(WORD)),
            ..Self::default()
        }
    }

    /// Bytes currently in use.
    pub fn size(&self) -> usize {
        self.words.len() * WORD
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    pub fn reallocations(&self) -> u32 {
        self.reallocations
    }

    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.words.as_slice())
    }

    /// Address of byte 0; only meaningful while no further `store` moves the arena.
    pub fn base_ptr(&self) -> *const u8 {
        self.words.as_ptr().cast()
    }

    /// Drops all regions. Previously returned regions become stale.
    pub fn reset(&mut self) {
        self.words.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Makes room for `bytes` more bytes so the following stores do not move the arena.
    pub fn reserve(&mut self, bytes: usize) {
        let words = bytes.div_ceil(WORD);
        if self.words.capacity() - self.words.len() < words {
            self.words.reserve(words);
            self.reallocations = self.reallocations.wrapping_add(1);
        }
    }

    /// Appends `items` and returns the region describing them.
    pub fn store<T: Pod>(&mut self, items: &[T]) -> Result<Region, EngineError> {
        let size = std::mem::size_of::<T>();
        if size == 0 || size % WORD != 0 || std::mem::align_of::<T>() > WORD {
            return Err(EngineError::Unaligned { size });
        }
        let words: &[u32] =
            bytemuck::try_cast_slice(items).map_err(|_| EngineError::Unaligned { size })?;

        let offset = self.size();
        if self.words.capacity() - self.words.len() < words.len() {
            self.reallocations = self.reallocations.wrapping_add(1);
        }
        self.words.extend_from_slice(words);

        Ok(Region {
            offset: offset as u32,
            len: items.len() as u32,
            epoch: self.epoch,
        })
    }

    /// Typed, non-owning view over a region.
    pub fn view<T: Pod>(&self, region: Region) -> Result<&[T], EngineError> {
        if region.epoch != self.epoch {
            return Err(EngineError::StaleRegion {
                region: region.epoch,
                memory: self.epoch,
            });
        }
        let elem_size = std::mem::size_of::<T>();
        let out_of_bounds = EngineError::OutOfBounds {
            offset: region.offset,
            len: region.len,
            elem_size,
            size: self.size(),
        };
        let start = region.offset as usize;
        let Some(end) = (region.len as usize)
            .checked_mul(elem_size)
            .and_then(|n| n.checked_add(start))
        else {
            return Err(out_of_bounds);
        };
        let Some(bytes) = self.bytes().get(start..end) else {
            return Err(out_of_bounds);
        };
        bytemuck::try_cast_slice(bytes).map_err(|_| EngineError::Unaligned { size: elem_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_then_view() {
        let mut mem = LinearMemory::new();
        let a = mem.store(&[[1i32, 2], [3, 4]]).unwrap();
        let b = mem.store(&[[0.5f32, 1.5]]).unwrap();
        assert_eq!(Region { offset: 0, len: 2, epoch: 0 }, a);
        assert_eq!(16, b.offset);
        assert_eq!(&[[1, 2], [3, 4]], mem.view::<[i32; 2]>(a).unwrap());
        assert_eq!(&[[0.5, 1.5]], mem.view::<[f32; 2]>(b).unwrap());
        assert_eq!(24, mem.size());
    }

    #[test]
    fn view_checks_bounds() {
        let mut mem = LinearMemory::new();
        mem.store(&[7u32; 4]).unwrap();
        let bad = Region { offset: 8, len: 3, epoch: 0 };
        assert!(matches!(
            mem.view::<u32>(bad),
            Err(EngineError::OutOfBounds { size: 16, .. })
        ));
        let overflow = Region { offset: 4, len: u32::MAX, epoch: 0 };
        assert!(mem.view::<[u32; 4]>(overflow).is_err());
    }

    #[test]
    fn reset_makes_regions_stale() {
        let mut mem = LinearMemory::new();
        let r = mem.store(&[1u32]).unwrap();
        mem.reset();
        assert_eq!(0, mem.size());
        assert!(matches!(
            mem.view::<u32>(r),
            Err(EngineError::StaleRegion { region: 0, memory: 1 })
        ));
    }

    #[test]
    fn rejects_sub_word_elements() {
        let mut mem = LinearMemory::new();
        assert!(matches!(
            mem.store(&[1u8, 2, 3]),
            Err(EngineError::Unaligned { size: 1 })
        ));
        assert!(matches!(
            mem.store(&[1u16, 2]),
            Err(EngineError::Unaligned { size: 2 })
        ));
    }

    #[test]
    fn growth_is_counted() {
        let mut mem = LinearMemory::with_capacity(8);
        mem.store(&[1u32, 2]).unwrap();
        assert_eq!(0, mem.reallocations());
        mem.store(&[3u32]).unwrap();
        assert_eq!(1, mem.reallocations());
    }

    #[test]
    fn reserve_avoids_later_moves() {
        let mut mem = LinearMemory::new();
        mem.reserve(64);
        let moved = mem.reallocations();
        let ptr = mem.base_ptr();
        mem.store(&[0u32; 16]).unwrap();
        assert_eq!(moved, mem.reallocations());
        assert_eq!(ptr, mem.base_ptr());
    }

    #[test]
    fn empty_region_views_empty_slice() {
        let mut mem = LinearMemory::new();
        let r = mem.store::<[f32; 2]>(&[]).unwrap();
        assert!(r.is_empty());
        assert!(mem.view::<[f32; 2]>(r).unwrap().is_empty());
    }
}
