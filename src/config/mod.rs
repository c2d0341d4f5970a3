use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    compiler::CompilerSettings,
    document::DocumentOptions,
    errors::{Result, SelfCalcError},
    format::NumberLocale,
    items::DEFAULT_DESCRIPTION,
};

pub const CONFIG_ENV: &str = "SELFCALC_CONFIG";
pub const COMPILER_ENV: &str = "SELFCALC_COMPILER";
pub const COMPILER_ARGS_ENV: &str = "SELFCALC_COMPILER_ARGS";
pub const OUTPUT_DIR_ENV: &str = "SELFCALC_OUTPUT_DIR";
pub const NO_VIEWER_ENV: &str = "SELFCALC_NO_VIEWER";

const CONFIG_DIR_NAME: &str = "selfcalc";
const CONFIG_FILE_NAME: &str = "config.json";
const SOURCE_EXTENSION: &str = "tex";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub item_count: usize,
    pub description: String,
    /// Directory receiving the document and compiler output. Defaults to the
    /// system temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub file_stem: String,
    pub compiler: CompilerSettings,
    pub open_viewer: bool,
    pub locale: NumberLocale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_count: 10,
            description: DEFAULT_DESCRIPTION.into(),
            output_dir: None,
            file_stem: "example".into(),
            compiler: CompilerSettings::default(),
            open_viewer: true,
            locale: NumberLocale::default(),
        }
    }
}

impl Config {
    /// Resolves the configuration file, applies environment overrides and
    /// validates the result.
    pub fn load() -> Result<Self> {
        let mut config = match config_file_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|err| SelfCalcError::io(path, err))?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(program) = env_value(COMPILER_ENV) {
            self.compiler.program = program;
        }
        if let Some(raw) = env_value(COMPILER_ARGS_ENV) {
            self.compiler.args = shell_words::split(&raw).map_err(|err| {
                SelfCalcError::InvalidConfig(format!("{COMPILER_ARGS_ENV}: {err}"))
            })?;
        }
        if let Some(dir) = env::var_os(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if env::var_os(NO_VIEWER_ENV).is_some() {
            self.open_viewer = false;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_stem.trim().is_empty() {
            return Err(SelfCalcError::InvalidConfig(
                "file_stem must not be empty".into(),
            ));
        }
        if self.file_stem.contains(['/', '\\']) {
            return Err(SelfCalcError::InvalidConfig(format!(
                "file_stem `{}` must be a bare file name",
                self.file_stem
            )));
        }
        if self.compiler.program.trim().is_empty() {
            return Err(SelfCalcError::InvalidConfig(
                "compiler.program must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(env::temp_dir)
    }

    /// Path of the emitted LaTeX source inside [`Config::output_dir`].
    pub fn source_path(&self) -> PathBuf {
        self.output_dir().join(self.source_file_name())
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.{}", self.file_stem, SOURCE_EXTENSION)
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            locale: self.locale,
        }
    }
}

/// Explicit file from [`CONFIG_ENV`], else the per-user file if it exists.
fn config_file_path() -> Option<PathBuf> {
    if let Some(custom) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(custom));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_scenario() {
        let config = Config::default();
        assert_eq!(config.item_count, 10);
        assert_eq!(config.description, r"\lipsum[2][1-5]");
        assert_eq!(config.compiler.program, "lualatex");
        assert!(config.open_viewer);
        assert_eq!(
            config.source_path(),
            env::temp_dir().join("example.tex")
        );
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "item_count": 3, "locale": { "decimal_separator": ",", "grouping_separator": "." } }"#,
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.item_count, 3);
        assert_eq!(config.locale, NumberLocale::german());
        assert_eq!(config.file_stem, "example");
        assert_eq!(config.compiler, CompilerSettings::default());
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(SelfCalcError::Serde(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load_from(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SelfCalcError::Io { .. }));
    }

    #[test]
    fn validate_rejects_unusable_values() {
        let mut config = Config {
            file_stem: " ".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        config.file_stem = "nested/example".into();
        assert!(config.validate().is_err());
        config.file_stem = "example".into();
        config.compiler.program = String::new();
        assert!(matches!(
            config.validate(),
            Err(SelfCalcError::InvalidConfig(_))
        ));
    }
}
