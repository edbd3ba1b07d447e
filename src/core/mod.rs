pub mod constants;
pub mod trail;
pub mod tween;

pub use constants::*;
pub use trail::*;
pub use tween::*;
