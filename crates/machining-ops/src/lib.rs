pub mod machining;
pub mod tool;
pub mod types;

pub use machining::{execute_machining, MachinedPair};
pub use tool::synthesize_tool;
pub use types::OpError;
