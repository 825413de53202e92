use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use saju_calendar::{LunarTable, SexagenaryCalendar, ZiHourMode};
use saju_core::{AssembleOptions, CivilDate, SajuEngine, UnknownHour};
use serde::Deserialize;

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub unknown_hour: UnknownHour,
    pub zi_hour: ZiHourMode,
    pub lunar_table: Option<PathBuf>,
    /// Clock used for "today" when no date is given; 0 is UTC, 9 is KST.
    pub utc_offset_hours: i8,
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SAJU_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;
    let path = PathBuf::from(home).join(".saju").join("config.toml");
    path.exists().then_some(path)
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("malformed config")?;
        if !(-12..=14).contains(&config.utc_offset_hours) {
            bail!(
                "utc_offset_hours must be between -12 and 14, got {}",
                config.utc_offset_hours
            );
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("in {}", path.display()))?;
        // relative table paths are relative to the config file
        if let (Some(table), Some(dir)) = (&config.lunar_table, path.parent())
            && table.is_relative()
        {
            config.lunar_table = Some(dir.join(table));
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// An explicit path must exist; the fallback locations may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn calendar(&self) -> Result<SexagenaryCalendar> {
        let table = match &self.lunar_table {
            Some(path) => LunarTable::load(path)
                .with_context(|| format!("failed to load lunar table {}", path.display()))?,
            None => {
                tracing::debug!("no lunar table configured; lunar dates will be read as solar");
                LunarTable::default()
            }
        };
        Ok(SexagenaryCalendar::new(self.zi_hour, table))
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        i32::from(self.utc_offset_hours) * 60
    }

    pub fn today(&self) -> CivilDate {
        CivilDate::today_at_offset(self.utc_offset_minutes())
    }

    pub fn engine(&self) -> Result<SajuEngine<SexagenaryCalendar>> {
        let options = AssembleOptions {
            unknown_hour: self.unknown_hour,
        };
        Ok(SajuEngine::new(self.calendar()?, options))
    }
}
