pub mod distance;
pub mod validate;

pub use distance::{
    build_distance_matrix, build_distance_matrix_from_raw, jukes_cantor, DistanceMatrix,
    SATURATION_DISTANCE,
};
pub use validate::{sorted_ids, validate_alignment_map, RawAlignmentMap};
