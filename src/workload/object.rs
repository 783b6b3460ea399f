//! Kernel objects
//!
//! A kernel object is an identifier plus a fixed block of computed fields.
//! One is allocated on the heap for every iteration of the benchmark loop.

use crate::common::constants::{FIELD_COUNT, VALUE_MASK};

/// Adds two values with 64-bit wraparound and clears the sign bit.
#[inline]
pub fn masked_add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b) & VALUE_MASK
}

/// Folds one observed value into the running accumulator.
#[inline]
pub fn fold_accumulator(accumulator: i64, value: i64) -> i64 {
    masked_add(accumulator, value)
}

/// Fixed-size object allocated and populated once per iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelObject {
    id: i64,
    data: [i64; FIELD_COUNT],
}

impl KernelObject {
    /// Create a new object with every field zeroed
    pub fn new(id: i64) -> Self {
        Self {
            id,
            data: [0; FIELD_COUNT],
        }
    }

    /// Create a new heap-allocated object
    pub fn boxed(id: i64) -> Box<Self> {
        Box::new(Self::new(id))
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Populate every field with `(id + j) & VALUE_MASK`
    pub fn perform_work(&mut self) {
        for (j, field) in self.data.iter_mut().enumerate() {
            *field = masked_add(self.id, j as i64);
        }
    }

    /// Get the field at `index`, or `None` past the end of the block
    pub fn get_data(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    pub fn data(&self) -> &[i64; FIELD_COUNT] {
        &self.data
    }
}
