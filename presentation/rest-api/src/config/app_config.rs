use super::{
    commerce_config::CommerceConfig, cors_config, server_config::ServerConfig,
    storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub commerce: CommerceConfig,
    pub storefront: StorefrontConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            commerce: CommerceConfig::from_env(),
            storefront: StorefrontConfig::from_env(),
        }
    }
}
