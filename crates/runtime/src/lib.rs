//! Host plumbing for the hex map editor.
//!
//! `hexmap-runtime` surrounds the synchronous [`hexmap_core::EditorEngine`]
//! with the collaborators an interactive host needs:
//! - [`events`] broadcasts editor notifications on topic channels
//! - [`dispatch`] routes input events to explicitly registered handlers
//! - [`textures`] resolves one texture per terrain under a timeout
//! - [`repository`] stores and retrieves saved maps by name
//! - [`session`] ties them together; it can only be built from a resolved
//!   texture atlas, so nothing is drawn or edited before textures exist
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod repository;
pub mod session;
pub mod textures;

pub use config::RuntimeConfig;
pub use dispatch::{
    Flow, HandlerCriticality, HandlerRegistry, InputEvent, InputKind, RegisteredHandler,
};
pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, MapEvent, SessionEvent, Topic, ViewEvent};
pub use repository::{
    FileMapRepository, InMemoryMapRepository, MapRepository, RepositoryError, resolve_file_name,
};
pub use session::EditorSession;
pub use textures::{
    MemoryTextureProvider, TextureAtlas, TextureError, TextureProvider, resolve_textures,
};
