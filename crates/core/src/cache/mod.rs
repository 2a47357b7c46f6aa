//! Memoization of built month grids.
//!
//! Grids depend only on a [`GridKey`](crate::calendar::GridKey), so the
//! cache lives outside any one calendar and can be shared between them.

mod memory;

pub use memory::GridCache;
