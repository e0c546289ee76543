use std::fs::File;
use std::io::{BufReader, Error as IOError, Read};
use std::path::{Path, PathBuf};

use serde_json::{error::Error as SerdeError, Value};
use thiserror::Error;

use super::resources;
use super::tag_vector::TAG_VECTOR_WIDTH;

// Setting keys
pub const TAG_VECTOR_WIDTH_KEY: &str = "tagVectorWidth";
pub const PHRASAL_VERB_RANGE: &str = "phrasalVerbRange";
pub const PASSIVE_RANGE: &str = "passiveRange";
pub const EXTRAPOSITION_RANGE: &str = "extrapositionRange";
pub const TAG_MATCH_FILE: &str = "tagMatchFile";
pub const TOKEN_MATCH_FILE: &str = "tokenMatchFile";
pub const TOKEN_TAG_MATCH_FILE: &str = "tokenTagMatchFile";
pub const REPLACEMENT_FILE: &str = "replacementFile";
pub const LEXICON_FILE: &str = "lexiconFile";
pub const ANNOTATION_PASS: &str = "annotationPass";

pub const DEFAULT_PHRASAL_VERB_RANGE: usize = 4;
pub const DEFAULT_PASSIVE_RANGE: usize = 4;
pub const DEFAULT_EXTRAPOSITION_RANGE: usize = 7;

#[derive(Error, Debug)]
pub enum ConfigErr {
  #[error("{self:?}")]
  IOError(#[from] IOError),
  #[error("{self:?}")]
  SerdeError(#[from] SerdeError),
  #[error("`{0}` must be an integer >= 1, got {1}")]
  InvalidRangeErr(String, String),
  #[error("`tagVectorWidth` must be 6, got {0}")]
  InvalidWidthErr(String),
  #[error("setting file must contain a JSON object")]
  InvalidFormatErr,
}

#[derive(Debug)]
pub struct Config {
  pub settings: Value,
  pub resource_dir: Option<PathBuf>,
}

impl Config {
  pub fn empty() -> Result<Config, ConfigErr> {
    let settings = serde_json::from_str(resources::SETTINGS_JSON)?;
    Ok(Config {
      settings,
      resource_dir: None,
    })
  }
  pub fn from_value(settings: Value, resource_dir: Option<PathBuf>) -> Config {
    Config {
      settings,
      resource_dir,
    }
  }
  /// Reads the setting file at `path` (embedded defaults when `None`).
  /// Table files resolve against `resource_dir`, else the setting file's
  /// directory.
  pub fn setup(path: Option<&str>, resource_dir: Option<&str>) -> Result<Config, ConfigErr> {
    let mut config = match path {
      Some(path) => {
        let mut buf = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut buf)?;
        let settings: Value = serde_json::from_str(&buf)?;
        if !settings.is_object() {
          return Err(ConfigErr::InvalidFormatErr);
        }
        Config::from_value(settings, Path::new(path).parent().map(|p| p.to_path_buf()))
      }
      None => Config::empty()?,
    };
    if let Some(dir) = resource_dir {
      config.resource_dir = Some(PathBuf::from(dir));
    }
    config.tag_vector_width()?;
    Ok(config)
  }
  fn range(&self, key: &str, default: usize) -> Result<usize, ConfigErr> {
    match self.settings.get(key) {
      None | Some(Value::Null) => Ok(default),
      Some(Value::Number(n)) => match n.as_u64() {
        Some(v) if v >= 1 => Ok(v as usize),
        _ => Err(ConfigErr::InvalidRangeErr(key.to_string(), n.to_string())),
      },
      Some(v) => Err(ConfigErr::InvalidRangeErr(key.to_string(), v.to_string())),
    }
  }
  pub fn phrasal_verb_range(&self) -> Result<usize, ConfigErr> {
    self.range(PHRASAL_VERB_RANGE, DEFAULT_PHRASAL_VERB_RANGE)
  }
  pub fn passive_range(&self) -> Result<usize, ConfigErr> {
    self.range(PASSIVE_RANGE, DEFAULT_PASSIVE_RANGE)
  }
  pub fn extraposition_range(&self) -> Result<usize, ConfigErr> {
    self.range(EXTRAPOSITION_RANGE, DEFAULT_EXTRAPOSITION_RANGE)
  }
  /// The width is fixed for the tagset; the setting only guards against a
  /// configuration written for another tagset version.
  pub fn tag_vector_width(&self) -> Result<usize, ConfigErr> {
    match self.settings.get(TAG_VECTOR_WIDTH_KEY) {
      None | Some(Value::Null) => Ok(TAG_VECTOR_WIDTH),
      Some(Value::Number(n)) if n.as_u64() == Some(TAG_VECTOR_WIDTH as u64) => Ok(TAG_VECTOR_WIDTH),
      Some(v) => Err(ConfigErr::InvalidWidthErr(v.to_string())),
    }
  }
  pub fn resource_path(&self, key: &str) -> Option<PathBuf> {
    match (self.settings.get(key), &self.resource_dir) {
      (Some(Value::String(p)), Some(dir)) => Some(dir.join(p)),
      _ => None,
    }
  }
}
