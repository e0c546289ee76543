use std::fs::File;
use std::io::{BufReader, Error as IOError, Read};

use log::{debug, warn};
use thiserror::Error;

use super::replacement_table::{ReplacementTable, ReplacementTableErr};
use super::tag_table::{KeyedTagTable, TagMap, TagTableErr, TokenMap, TokenTagMap};
use super::word_set_lexicon::{WordSetLexicon, WordSetLexiconErr};
use crate::config::{
  Config, LEXICON_FILE, REPLACEMENT_FILE, TAG_MATCH_FILE, TOKEN_MATCH_FILE, TOKEN_TAG_MATCH_FILE,
};
use crate::resources;

#[derive(Error, Debug)]
pub enum LexicalResourcesErr {
  #[error("`{0}` has no embedded default")]
  NoDefaultResourceErr(String),
  #[error("{0}: {1}")]
  TagTableErr(String, TagTableErr),
  #[error("{0}")]
  WordSetLexiconErr(#[from] WordSetLexiconErr),
  #[error("{0}")]
  ReplacementTableErr(#[from] ReplacementTableErr),
  #[error("{0}")]
  IOError(#[from] IOError),
}

/// Read-only tables shared by every annotation pass and every sentence.
#[derive(Debug, Default)]
pub struct LexicalResources {
  pub tag_map: TagMap,
  pub token_map: TokenMap,
  pub token_tag_map: TokenTagMap,
  pub replacements: ReplacementTable,
  pub lexicon: WordSetLexicon,
}

fn open_resource(config: &Config, key: &str) -> Result<Box<dyn Read>, LexicalResourcesErr> {
  if let Some(path) = config.resource_path(key) {
    if path.is_file() {
      debug!("{} loaded from {}", key, path.display());
      return Ok(Box::new(BufReader::new(File::open(path)?)));
    }
    warn!("{} not found, falling back to the embedded default", path.display());
  }
  resources::default_resource(key)
    .map(|s| Box::new(s.as_bytes()) as Box<dyn Read>)
    .ok_or_else(|| LexicalResourcesErr::NoDefaultResourceErr(key.to_string()))
}

fn read_table<T, F>(config: &Config, key: &str, read: F) -> Result<T, LexicalResourcesErr>
where
  F: FnOnce(Box<dyn Read>) -> Result<T, TagTableErr>,
{
  read(open_resource(config, key)?).map_err(|e| LexicalResourcesErr::TagTableErr(key.to_string(), e))
}

impl LexicalResources {
  pub fn setup(config: &Config) -> Result<LexicalResources, LexicalResourcesErr> {
    let tag_map = read_table(config, TAG_MATCH_FILE, KeyedTagTable::tag_map_from_reader)?;
    let token_map = read_table(config, TOKEN_MATCH_FILE, KeyedTagTable::token_map_from_reader)?;
    let token_tag_map = read_table(config, TOKEN_TAG_MATCH_FILE, TokenTagMap::from_reader)?;
    let replacements = ReplacementTable::from_reader(open_resource(config, REPLACEMENT_FILE)?)?;
    let lexicon = WordSetLexicon::from_reader(open_resource(config, LEXICON_FILE)?)?;
    lexicon.validate()?;
    debug!(
      "lexical resources: {} tags, {} tokens, {} token/tag pairs, {} replacements",
      tag_map.len(),
      token_map.len(),
      token_tag_map.len(),
      replacements.len()
    );
    Ok(LexicalResources {
      tag_map,
      token_map,
      token_tag_map,
      replacements,
      lexicon,
    })
  }
}
