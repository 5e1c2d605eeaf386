use abfeprep::engine::config as core_config;

#[derive(Debug)]
pub struct AppConfig {
    pub core_config: core_config::SetupConfig,
}
