//! Column names the pipeline depends on.
//!
//! Input files may carry any other columns; only these names are read,
//! renamed or written by the pipeline.

/// Columns as they appear in raw network files.
pub mod raw_network {
    /// Renamed to [`super::FEEDER_ID`] during standardization.
    pub const FEEDER_SEGMENT_ID: &str = "feeder_segment_id";
    /// Renamed to [`super::MAX_HOSTING_CAPACITY`] during standardization.
    pub const HOSTING_CAPACITY: &str = "hosting_capacity";
}

/// Feeder identifier, shared by network and DER tables after standardization.
pub const FEEDER_ID: &str = "feeder_id";

/// Remaining hosting capacity of a feeder.
pub const MAX_HOSTING_CAPACITY: &str = "max_hosting_capacity";

/// Name of the source a row was loaded from.
pub const UTILITY_NAME: &str = "utility_name";

/// Renames applied to network data, as `(from, to)` pairs.
pub const NETWORK_RENAMES: [(&str, &str); 2] = [
    (raw_network::FEEDER_SEGMENT_ID, FEEDER_ID),
    (raw_network::HOSTING_CAPACITY, MAX_HOSTING_CAPACITY),
];
