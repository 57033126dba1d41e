#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod dirty;
pub mod error;
pub mod kv_store;
pub mod player;
pub mod scorekeeper;
pub mod scores;
pub mod serve;
pub mod settings;
pub mod test_util;

pub use dirty::*;
pub use error::*;
pub use kv_store::*;
pub use player::*;
pub use scorekeeper::*;
pub use scores::*;
pub use serve::*;
pub use settings::*;
