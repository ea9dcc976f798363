pub mod display;
pub mod parser;
pub mod types;
pub mod validate;

pub use parser::{ConfigParser, ParseResult, FromYaml, ConfigError};
pub use types::{Config, ServerConfig, RouteConfig};
pub use display::display_config;
pub use validate::validate_configs;
