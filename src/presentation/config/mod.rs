mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    CloudModelSettings, LocalModelSettings, LoggingSettings, ServerSettings, Settings,
};
