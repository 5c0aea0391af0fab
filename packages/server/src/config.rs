//! Server configuration from command-line arguments and the environment.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::domain::{GroundItemLayout, MapBounds, ValueObjectError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidMapBounds(#[from] ValueObjectError),

    #[error("--min-items ({min}) must not exceed --max-items ({max})")]
    InvalidItemRange { min: usize, max: usize },
}

#[derive(Parser, Debug, Clone)]
#[command(name = "skirmish-server")]
#[command(about = "Authoritative game-state server for a top-down multiplayer shooter", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Map width in world units
    #[arg(long, default_value_t = 4000.0)]
    pub map_width: f64,

    /// Map height in world units
    #[arg(long, default_value_t = 4000.0)]
    pub map_height: f64,

    /// Minimum number of items spawned on the ground at startup
    #[arg(long, default_value_t = 64)]
    pub min_items: usize,

    /// Maximum number of items spawned on the ground at startup
    #[arg(long, default_value_t = 128)]
    pub max_items: usize,

    /// JSON item catalog to load instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout().map(|_| ())
    }

    pub fn bounds(&self) -> Result<MapBounds, ConfigError> {
        Ok(MapBounds::new(self.map_width, self.map_height)?)
    }

    pub fn layout(&self) -> Result<GroundItemLayout, ConfigError> {
        if self.min_items > self.max_items {
            return Err(ConfigError::InvalidItemRange {
                min: self.min_items,
                max: self.max_items,
            });
        }
        Ok(GroundItemLayout {
            min_items: self.min_items,
            max_items: self.max_items,
            bounds: self.bounds()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        ServerConfig::try_parse_from(std::iter::once("skirmish-server").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        // テスト項目: 引数なしではデフォルト値が使われる
        // given (前提条件):
        // PORT / HOST が環境変数に設定されていないこと
        if std::env::var_os("PORT").is_some() || std::env::var_os("HOST").is_some() {
            return;
        }

        // when (操作):
        let config = parse(&[]);

        // then (期待する結果):
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.map_width, 4000.0);
        assert_eq!(config.map_height, 4000.0);
        assert_eq!((config.min_items, config.max_items), (64, 128));
        assert!(config.catalog.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_with_equals_syntax() {
        // テスト項目: --port=4000 形式の指定が受け付けられる
        // given (前提条件):
        let args = ["--port=4000", "-H", "127.0.0.1"];

        // when (操作):
        let config = parse(&args);

        // then (期待する結果):
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_layout_uses_map_bounds() {
        // テスト項目: layout にはマップの大きさとアイテム数の範囲が反映される
        // given (前提条件):
        let config = parse(&[
            "--map-width",
            "1280",
            "--map-height",
            "720",
            "--min-items",
            "2",
            "--max-items",
            "5",
        ]);

        // when (操作):
        let layout = config.layout().unwrap();

        // then (期待する結果):
        assert_eq!(layout.min_items, 2);
        assert_eq!(layout.max_items, 5);
        assert_eq!(layout.bounds.width(), 1280.0);
        assert_eq!(layout.bounds.height(), 720.0);
    }

    #[test]
    fn test_inverted_item_range_is_rejected() {
        // テスト項目: min-items が max-items を超えるとエラーになる
        // given (前提条件):
        let config = parse(&["--min-items", "10", "--max-items", "3"]);

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ConfigError::InvalidItemRange { min: 10, max: 3 })
        );
    }

    #[test]
    fn test_non_positive_map_is_rejected() {
        // テスト項目: 幅が 0 以下のマップはエラーになる
        // given (前提条件):
        let config = parse(&["--map-width", "0"]);

        // when (操作):
        let result = config.validate();

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::InvalidMapBounds(_))));
    }
}
