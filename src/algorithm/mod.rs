pub mod scc;
pub mod topo;
pub mod dag_paths;

pub use dag_paths::{DagPathSolver, Distances, PathKind};
pub use scc::{SccResult, TarjanScc};
pub use topo::{TopoSorter, TopologicalOrder};
