use crate::error::{DoraError, Result};
use crate::types::config::DoraConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "dora.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".dora/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/dora/config.toml";

/// Config files in merge order. Later layers win key by key; any layer may
/// be absent.
#[derive(Debug, Clone)]
pub struct ConfigLayers {
    pub global: Option<PathBuf>,
    pub repo: PathBuf,
    pub local: PathBuf,
}

impl ConfigLayers {
    pub fn for_dir(dir: &Path, home: Option<&Path>) -> Self {
        Self {
            global: home.map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE)),
            repo: dir.join(DEFAULT_CONFIG_FILE),
            local: dir.join(DEFAULT_LOCAL_FILE),
        }
    }

    fn paths(&self) -> impl Iterator<Item = &Path> {
        self.global
            .as_deref()
            .into_iter()
            .chain([self.repo.as_path(), self.local.as_path()])
    }
}

pub fn load_config(dir: &Path) -> Result<Option<DoraConfig>> {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    load_layers(&ConfigLayers::for_dir(dir, home.as_deref()))
}

/// Merges every existing layer. `None` when no layer exists at all.
pub(crate) fn load_layers(layers: &ConfigLayers) -> Result<Option<DoraConfig>> {
    let mut merged: Option<Table> = None;
    for path in layers.paths().filter(|path| path.is_file()) {
        let layer = read_table(path)?;
        tracing::debug!(path = %path.display(), "applying config layer");
        match merged.as_mut() {
            Some(base) => overlay(base, layer),
            None => merged = Some(layer),
        }
    }

    let Some(merged) = merged else {
        return Ok(None);
    };
    let cfg: DoraConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| DoraError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_table(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| DoraError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge recursively; every other value is replaced.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match base.get_mut(&key) {
            Some(Value::Table(existing)) if value.is_table() => {
                if let Value::Table(nested) = value {
                    overlay(existing, nested);
                }
            }
            _ => {
                base.insert(key, value);
            }
        }
    }
}
