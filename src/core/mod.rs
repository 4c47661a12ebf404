pub mod clock;
pub mod input_adapter;
pub mod scroll;

pub use clock::*;
pub use input_adapter::*;
pub use scroll::*;
