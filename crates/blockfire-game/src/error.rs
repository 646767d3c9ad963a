use blockfire_combat::CombatError;
use blockfire_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("inventory must list at least one block")]
    EmptyInventory,
    #[error("spawner: {0}")]
    Spawner(#[from] CombatError),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
