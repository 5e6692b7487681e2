//! Session orchestration and persistence for the Wayfarer text adventure.
//!
//! The runtime owns the top-level loop that ties navigation, encounters and
//! menus together, and the save repository that persists player state
//! between sessions. Game rules live in `game-core`; this crate only
//! sequences them.
pub mod error;
pub mod repository;
pub mod session;

pub use error::SessionError;
pub use repository::{
    FileSaveRepository, MemorySaveRepository, PlayerDocument, RepositoryError, SaveDocuments,
    SaveRepository, VisitedDocument,
};
pub use session::{Session, Traversal, start_player};
