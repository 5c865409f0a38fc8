//! Matrix storage, text I/O and the sequential reference multiply.
//!
//! The sequential multiply is the correctness baseline the threaded
//! implementation is checked against.

pub mod dense;
pub mod io;
pub mod naive_ijk;

pub use dense::Matrix;
