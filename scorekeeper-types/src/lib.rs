pub mod errors;
pub mod fields;
pub mod game;
pub mod messages;
pub mod naming;
pub mod player;
pub mod round;

// Re-export all types
pub use errors::*;
pub use fields::{FromFields, construct};
pub use game::*;
pub use messages::*;
pub use naming::to_camel;
pub use player::*;
pub use round::*;
