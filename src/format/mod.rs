//! GVRP text format.
//!
//! Whitespace-delimited tokens in a fixed section order:
//!
//! ```text
//! NAME : <string>
//! COMMENT : GVRP
//! DIMENSION : <positive int>
//! VEHICLES : <positive int>
//! GVRP_SETS : <positive int>
//! CAPACITY : <positive int>
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! <nodeId> <x> <y>                  (DIMENSION times)
//! GVRP_SET_SECTION
//! <setId> <nodeId> <nodeId> ... -1  (GVRP_SETS times)
//! DEMAND_SECTION
//! <setId> <demand>                  (GVRP_SETS times)
//! ```
//!
//! Keywords are case-sensitive and each header keyword is followed by a
//! standalone `:` token. Anything after the demand section is ignored.

mod reader;

pub use reader::{parse_instance, read_instance_file, GvrpProblem};
