mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, GeminiSettings, LoggingSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings,
};
