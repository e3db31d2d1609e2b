pub mod game;
pub mod journal;
pub mod journal_file;
pub mod replay;
pub mod scenario;
pub mod session;
pub mod state;
pub mod surface;
pub mod types;
pub mod vars;

pub use game::Game;
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use scenario::{NpcSpec, Scenario, ScenarioError};
pub use session::{ChoiceSession, DistanceTrigger};
pub use state::{GameState, Map, MoveBehavior};
pub use surface::{ChoiceSurface, HeadlessSurface};
pub use types::*;
