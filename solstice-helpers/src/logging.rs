use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LogsCfg;

/// Глобальный subscriber для бинарников/тестов, которые пользуются хелперами.
/// Уровень берём из RUST_LOG (пример: RUST_LOG=info,solstice_helpers=debug),
/// иначе из конфига. Повторный вызов возвращает ошибку, а не паникует.
pub fn init(cfg: &LogsCfg) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .map_err(|e| anyhow!("invalid log filter `{}`: {e}", cfg.level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("tracing subscriber already installed: {e}"))
}
