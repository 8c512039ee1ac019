pub mod traits;
pub mod directed;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::{DirectedGraph, Edge};
