//! 2D vector algebra and segment queries for small physics sketches.
//!
//! [`Vector2`] carries the in-place API (`add`, `normalize`, `rotate`, ...),
//! while [`library`] offers the same algebra as pure functions returning new
//! vectors. [`geometry`] answers the two questions collision code keeps
//! asking: do two segments cross, and how far is a point from a segment.
//!
//! ```
//! use rgeom::{segment_intersect, vector};
//!
//! let hit = segment_intersect(
//!     &vector(0.0, 0.0),
//!     &vector(4.0, 4.0),
//!     &vector(0.0, 4.0),
//!     &vector(4.0, 0.0),
//! );
//! assert_eq!(hit, Some((vector(2.0, 2.0), 0.5)));
//! ```

pub mod geometry;
pub mod library;
pub mod vector;

pub use geometry::{Segment, min_distance_point_to_segment, segment_intersect};
pub use library::*;
pub use vector::Vector2;
