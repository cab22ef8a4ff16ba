pub mod cmd;
pub mod errors;
pub mod meta;
pub mod osfamily;

pub use cmd::*;
pub use errors::*;
pub use meta::*;
pub use osfamily::*;
