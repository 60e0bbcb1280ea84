pub mod primitives;
pub mod masking;
pub mod extraction;
pub mod measure;
pub mod ordering;

pub use primitives::*;
pub use masking::*;
pub use extraction::*;
pub use measure::*;
pub use ordering::*;
