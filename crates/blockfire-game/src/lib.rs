//! Player state, input events and the fixed-timestep game driver.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod input;
pub mod player;

pub use config::{GameConfig, InventoryConfig, PlayerConfig, WindowConfig};
pub use error::{ConfigError, GameError};
pub use event::{EventEnvelope, EventQueue};
pub use game::{Game, SUBSTEPS, TICKS_PER_SEC};
pub use input::{InputEvent, Key, MouseButton};
pub use player::{PhysicsParams, PlayerState};
