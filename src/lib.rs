//! A growable boolean vector that stores only the boundaries between runs of
//! equal values.
//!
//! [`RleBoolVec`] keeps one ordered-map entry per maximal run, so a vector with
//! long runs takes memory proportional to the number of runs rather than its
//! length, while still supporting random access, point updates, insertion and
//! removal anywhere, and iteration from both ends.
//!
//! ```
//! use rle_bool_vec::RleBoolVec;
//!
//! let mut v = RleBoolVec::from_elem(false, 5);
//! v.set(2, true).unwrap();
//! assert_eq!(v.num_runs(), 3);
//! assert_eq!(v.to_string(), "00100");
//! ```

pub mod bit_vec;
pub mod error;
mod iter;
mod rle_bool_vec;
mod run_list;
mod run_store;

pub use bit_vec::BitVec;
pub use error::{Error, Result};
pub use iter::{Iter, Run, Runs};
pub use rle_bool_vec::RleBoolVec;
pub use run_list::{RunList, RunPair};
