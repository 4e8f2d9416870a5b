#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;

pub mod growth;
pub mod heap;
pub mod order;

pub use growth::{DoublingGrowth, GrowthPolicy, DEFAULT_CAPACITY, MIN_CAPACITY};
pub use heap::{IndirectHeap, UnsupportedOperation};
pub use order::{Comparator, OrdComparator};
