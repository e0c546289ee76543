use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde_json::{error::Error as SerdeError, Value};
use thiserror::Error;

pub const WH_COMPLEMENTIZERS: &str = "wh_complementizers";
pub const EXTRAPOSING_VERBS: &str = "extraposing_verbs";
pub const EXTRAPOSED_TO_VERBS: &str = "extraposed_to_verbs";
pub const EXTRAPOSING_ADJECTIVES: &str = "extraposing_adjectives";
pub const NECESSITY_MODALS: &str = "necessity_modals";
pub const POSSIBILITY_MODALS: &str = "possibility_modals";
pub const PREDICTION_MODALS: &str = "prediction_modals";
pub const POST_NOMINAL_DOMAINS: &str = "post_nominal_domains";
pub const POST_NOMINAL_EXCEPTIONS: &str = "post_nominal_exceptions";

const REQUIRED_SETS: [&str; 5] = [
  WH_COMPLEMENTIZERS,
  EXTRAPOSING_VERBS,
  EXTRAPOSED_TO_VERBS,
  EXTRAPOSING_ADJECTIVES,
  POST_NOMINAL_EXCEPTIONS,
];
const REQUIRED_SEQUENCES: [&str; 3] = [NECESSITY_MODALS, POSSIBILITY_MODALS, PREDICTION_MODALS];
const REQUIRED_DOMAINS: [&str; 1] = [POST_NOMINAL_DOMAINS];

#[derive(Error, Debug)]
pub enum WordSetLexiconErr {
  #[error("{0} has an invalid format")]
  InvalidCategoryErr(String),
  #[error("{0} is not defined")]
  MissingCategoryErr(String),
  #[error("lexicon must be a JSON object")]
  InvalidFormatErr,
  #[error("{0}")]
  SerdeError(#[from] SerdeError),
}

/// Named word sets, word sequences, and groups of word sets.
///
/// A JSON array of strings becomes a set, an array of arrays becomes a list
/// of sequences (multi-word templates), and an object of arrays becomes an
/// ordered group of named sets (semantic domains). Words are lowercased.
#[derive(Debug, Default)]
pub struct WordSetLexicon {
  sets: HashMap<String, HashSet<String>>,
  sequences: HashMap<String, Vec<Vec<String>>>,
  groups: HashMap<String, Vec<(String, HashSet<String>)>>,
}

fn string_array(category: &str, values: &[Value]) -> Result<Vec<String>, WordSetLexiconErr> {
  values
    .iter()
    .map(|v| match v {
      Value::String(s) => Ok(s.to_lowercase()),
      _ => Err(WordSetLexiconErr::InvalidCategoryErr(category.to_string())),
    })
    .collect()
}

impl WordSetLexicon {
  pub fn from_value(value: &Value) -> Result<WordSetLexicon, WordSetLexiconErr> {
    let obj = value.as_object().ok_or(WordSetLexiconErr::InvalidFormatErr)?;
    let mut lexicon = WordSetLexicon::default();
    for (category, v) in obj {
      match v {
        Value::Array(arr) if arr.iter().all(|i| i.is_array()) && !arr.is_empty() => {
          let mut sequences = vec![];
          for item in arr {
            let words = string_array(category, item.as_array().map(|a| a.as_slice()).unwrap_or(&[]))?;
            if words.is_empty() {
              return Err(WordSetLexiconErr::InvalidCategoryErr(category.to_string()));
            }
            sequences.push(words);
          }
          lexicon.sequences.insert(category.to_string(), sequences);
        }
        Value::Array(arr) => {
          let words = string_array(category, arr)?;
          lexicon
            .sets
            .insert(category.to_string(), words.into_iter().collect());
        }
        Value::Object(domains) => {
          let mut group = vec![];
          for (name, words) in domains {
            let words = match words {
              Value::Array(arr) => string_array(category, arr)?,
              _ => return Err(WordSetLexiconErr::InvalidCategoryErr(category.to_string())),
            };
            group.push((name.to_string(), words.into_iter().collect()));
          }
          lexicon.groups.insert(category.to_string(), group);
        }
        _ => return Err(WordSetLexiconErr::InvalidCategoryErr(category.to_string())),
      }
    }
    Ok(lexicon)
  }
  pub fn from_reader<R: Read>(reader: R) -> Result<WordSetLexicon, WordSetLexiconErr> {
    let value: Value = serde_json::from_reader(reader)?;
    WordSetLexicon::from_value(&value)
  }
  /// Checks that every category the annotation passes read is present.
  pub fn validate(&self) -> Result<(), WordSetLexiconErr> {
    let missing = REQUIRED_SETS
      .iter()
      .find(|c| !self.sets.contains_key(**c))
      .or_else(|| {
        REQUIRED_SEQUENCES
          .iter()
          .find(|c| !self.sequences.contains_key(**c))
      })
      .or_else(|| REQUIRED_DOMAINS.iter().find(|c| !self.groups.contains_key(**c)));
    match missing {
      Some(category) => Err(WordSetLexiconErr::MissingCategoryErr(category.to_string())),
      None => Ok(()),
    }
  }
  pub fn contains(&self, category: &str, word: &str) -> bool {
    self
      .sets
      .get(category)
      .map(|set| set.contains(&word.to_lowercase()))
      .unwrap_or(false)
  }
  pub fn sequences(&self, category: &str) -> &[Vec<String>] {
    self
      .sequences
      .get(category)
      .map(|s| s.as_slice())
      .unwrap_or(&[])
  }
  pub fn contains_single(&self, category: &str, word: &str) -> bool {
    let word = word.to_lowercase();
    self
      .sequences(category)
      .iter()
      .any(|seq| seq.len() == 1 && seq[0] == word)
  }
  /// Name of the first set of the group `category` that contains `word`.
  pub fn group_of(&self, category: &str, word: &str) -> Option<&str> {
    let word = word.to_lowercase();
    self
      .groups
      .get(category)?
      .iter()
      .find(|(_, set)| set.contains(&word))
      .map(|(name, _)| name.as_str())
  }
}
