pub mod bbox;
pub mod frame;
pub mod mock_kernel;
pub mod primitives;
pub mod step;
pub mod tessellation;
pub mod traits;
pub mod truck_kernel;
pub mod types;

pub use frame::Frame;
pub use mock_kernel::{MockKernel, MockOp, MOCK_STEP_TEXT};
pub use traits::*;
pub use truck_kernel::TruckKernel;
pub use types::*;
