//! Multi-threaded multiply.
//!
//! Output rows are split into contiguous bands, one per thread. Each worker
//! owns a disjoint mutable slice of C and reads A and B by shared reference,
//! so nothing needs a lock. The only synchronization is the final join.
//!
//! - `partition`: row bands for N rows over T threads
//! - `worker`: inner-product loop for one band
//! - `row_band_mt`: fork/join driver

pub mod partition;
pub mod row_band_mt;
pub mod worker;
