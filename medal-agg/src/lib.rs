//! Derived-aggregate computation for the medal dashboard.
//!
//! Every function here is pure and stateless: raw table slices plus the
//! current selection/paging parameters in, fresh derived data out. Views
//! re-invoke these on every selection change and every qualifying resize;
//! nothing is updated incrementally or mutated in place.

pub mod cumulative;
pub mod flow;
pub mod labels;
pub mod paging;
pub mod ranking;
