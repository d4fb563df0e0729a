//! tracing の初期化
//!
//! ログは stderr に出す。stdout は `CSV read error: ...` の診断行専用。

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ViewerError};

const DEFAULT_FILTER: &str = "info";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// グローバルな subscriber を設定する。2回目以降の呼び出しは何もしない。
pub fn init() -> Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ViewerError::Logging(e.to_string()))?;

    let _ = INITIALIZED.set(());
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_ok() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }
}
