pub mod bitstream;
pub mod codec;
pub(crate) mod debug;
pub mod error;
pub mod iter;
pub mod metadata;
pub mod reserved;

pub use bitstream::*;
pub use codec::*;
pub use error::*;
pub use iter::*;
pub use metadata::*;
pub use reserved::*;
