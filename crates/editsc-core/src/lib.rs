pub mod bits;
pub mod block_type;
pub mod constants;
pub mod error;
pub mod math;
pub mod types;

pub use block_type::{BlockTypeDef, BlockTypeTable};
pub use error::CoreError;
pub use types::{Block, RegionCoord, SurfacePoint, WorldCoord};
