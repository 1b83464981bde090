pub mod axis;
pub mod feature;
pub mod handle;
pub mod output;
pub mod status;
pub mod stock;

pub use axis::*;
pub use feature::*;
pub use handle::*;
pub use output::*;
pub use status::*;
pub use stock::*;
