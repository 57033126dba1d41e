// Note. These is also `table_tennis_wasm/src/table_tennis_prelude.rs`.
//
// Prelude lives outside of `table_tennis_score` so that the library itself keeps spelling out
// full paths. Scorekeeping concepts are exposed directly; storage stays behind its namespace.

pub use table_tennis_score::player::*;
pub use table_tennis_score::scorekeeper::*;
pub use table_tennis_score::scores::*;
pub use table_tennis_score::serve::*;
pub use table_tennis_score::settings::*;
