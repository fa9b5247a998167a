pub mod crowd;

pub use crowd::{generate_crowd_data, LANDMARKS};
