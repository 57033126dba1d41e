// Note. These is also `table_tennis_console/src/table_tennis_prelude.rs`.
//
// The rationale for external prelude is there.

pub use table_tennis_score::player::*;
pub use table_tennis_score::scorekeeper::*;
pub use table_tennis_score::scores::*;
pub use table_tennis_score::serve::*;
pub use table_tennis_score::settings::*;
