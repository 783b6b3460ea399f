//! The per-iteration working set: kernel objects and the slots that own them

pub mod object;
pub mod slots;

pub use object::{fold_accumulator, masked_add, KernelObject};
pub use slots::SlotArray;
