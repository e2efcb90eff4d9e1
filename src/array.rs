use std::alloc::{alloc, dealloc, handle_alloc_error, realloc, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::sort::quick_sort;

/// Capacity of a freshly constructed or cleared list.
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list backed by one contiguous heap buffer.
///
/// Slots `[0, len)` hold the logical elements in list order; slots
/// `[len, cap)` are uninitialized. The buffer grows by a factor of 1.5 and is
/// never shrunk, except by [`DynamicArray::clear`] which returns it to
/// [`DEFAULT_CAPACITY`].
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the list uniquely owns its elements, so moving it to another thread
// moves the elements with it.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: `&DynamicArray<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> DynamicArray<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        let mut arr = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        };
        if Self::IS_ZST {
            // Zero-sized elements never need storage.
            arr.cap = usize::MAX;
        } else {
            arr.resize_buffer(DEFAULT_CAPACITY);
        }
        arr
    }

    /// Number of logical elements.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer, always `>= size()`.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends `item` after the last element.
    pub fn append(&mut self, item: T) {
        if self.len == self.cap {
            self.grow();
        }

        unsafe {
            // SAFETY: len < cap after growing, so the slot is inside the buffer.
            ptr::write(self.ptr.as_ptr().add(self.len), item);
        }
        self.len += 1;
    }

    /// Inserts `item` at `index`, shifting every element at `>= index` one
    /// slot to the right.
    ///
    /// `index == size()` appends. Anything larger is rejected and the list is
    /// left untouched.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.grow();
        }

        trace!("inserting at {} of {}", index, self.len);
        unsafe {
            // SAFETY: index <= len < cap; the shifted range [index, len) lands
            // in [index + 1, len + 1), still inside the buffer.
            let p = self.ptr.as_ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len, so the slot holds an initialized element.
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Removes and returns the element at `index`, shifting every element at
    /// `> index` one slot to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        trace!("removing at {} of {}", index, self.len);
        unsafe {
            // SAFETY: index < len. The element is moved out before the tail
            // is copied over it; the old last slot becomes uninitialized once
            // len is decremented, so nothing is dropped twice.
            let p = self.ptr.as_ptr().add(index);
            let item = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            Ok(item)
        }
    }

    /// Drops every element and returns the buffer to [`DEFAULT_CAPACITY`].
    pub fn clear(&mut self) {
        let elems = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // A panicking destructor must not leave dropped elements reachable.
        self.len = 0;
        unsafe {
            // SAFETY: the slice covered exactly the initialized elements.
            ptr::drop_in_place(elems);
        }

        if !Self::IS_ZST && self.cap != DEFAULT_CAPACITY {
            debug!("clearing list, capacity {} -> {}", self.cap, DEFAULT_CAPACITY);
            self.resize_buffer(DEFAULT_CAPACITY);
        }
    }

    /// Index of the first element equal to `item`, or `None`.
    ///
    /// Only the logical elements are scanned.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == item)
    }

    /// Sorts the list in place with a three-way comparator.
    ///
    /// Quicksort with the first element of each range as pivot: unstable,
    /// O(n log n) on average and O(n²) on already ordered input.
    pub fn sort<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 {
            return;
        }
        quick_sort(self.as_mut_slice(), &mut cmp);
    }

    fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized and ptr is non-null and aligned.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, and &mut self guarantees exclusive access.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn grow(&mut self) {
        // floor(cap * 1.5), but always at least one more slot.
        let new_cap = self
            .cap
            .checked_add(self.cap / 2)
            .map(|c| c.max(self.cap + 1))
            .unwrap_or_else(|| capacity_overflow());
        debug!("growing list buffer from {} to {} slots", self.cap, new_cap);
        self.resize_buffer(new_cap);
    }

    /// Moves the buffer to one of `new_cap` slots. Callers guarantee
    /// `new_cap >= len` and `new_cap > 0`.
    fn resize_buffer(&mut self, new_cap: usize) {
        debug_assert!(!Self::IS_ZST);
        debug_assert!(new_cap >= self.len && new_cap > 0);

        let new_layout = Layout::array::<T>(new_cap).unwrap_or_else(|_| capacity_overflow());
        let new_ptr = if self.cap == 0 {
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).unwrap_or_else(|_| capacity_overflow());
            unsafe { realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(new_ptr as *mut T) {
            Some(p) => p,
            None => handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            // 1. drop the logical elements
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            // 2. free the buffer
            if !Self::IS_ZST && self.cap != 0 {
                if let Ok(layout) = Layout::array::<T>(self.cap) {
                    dealloc(self.ptr.as_ptr() as *mut u8, layout);
                }
            }
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
