mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{AlgorithmConfig, CONFIG_VERSION, Config, PathsConfig};
pub use validation::validate_config_semantics;
