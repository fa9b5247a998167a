pub mod point;
pub mod responses;

// Re-export commonly used types
pub use point::{GeoPoint, Landmark};
pub use responses::CrowdDataResponse;
