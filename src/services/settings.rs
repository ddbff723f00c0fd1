use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub sources: Sources,
    #[serde(default)]
    pub analysis: Analysis,
}

#[derive(Debug, Deserialize, Default)]
pub struct Sources {
    pub employees: Option<String>,
    pub departments: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Analysis {
    pub dept_id: Option<i64>,
    pub raise_pct: Option<f64>,
}

/// Optional config file; a missing file means defaults. Flags override
/// whatever is set here.
pub fn load_settings() -> anyhow::Result<Settings> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/headcount/config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
