pub mod assembly;
pub mod config;
pub mod errors;
pub mod ids;
pub mod lookup;
pub mod requests;
pub mod rounds;
pub mod standings;
pub mod updates;

// Re-export main components
pub use assembly::*;
pub use config::Config;
pub use errors::*;
pub use ids::*;
pub use lookup::*;
pub use requests::*;
pub use rounds::*;
pub use standings::*;
pub use updates::*;
