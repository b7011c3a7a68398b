// Infrastructure layer modules
pub mod deployment_config;
pub mod logging;

// Re-exports
pub use deployment_config::{
    DeploymentConfig, ENV_FUNCTION_ALIAS, ENV_GREETING_VARIANT, ENV_STAGE,
};
pub use logging::init_logging;
