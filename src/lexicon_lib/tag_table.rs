use std::collections::HashMap;
use std::io::Read;
use std::num::ParseIntError;

use thiserror::Error;

use crate::tag_vector::{Slot, SlotErr, TagVector};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagEntry {
  pub value: String,
  pub slot: Slot,
}

#[derive(Error, Debug)]
pub enum TagTableErr {
  #[error("invalid format at line {0}")]
  InvalidFormatErr(usize),
  #[error("invalid slot at line {0}: {1}")]
  InvalidSlotErr(usize, SlotErr),
  #[error("invalid slot at line {0}: {1}")]
  ParseIntError(usize, ParseIntError),
  #[error("{0}")]
  CSVError(#[from] csv::Error),
}

pub fn apply_entries(entries: &[TagEntry], tag: &mut TagVector) {
  for entry in entries {
    tag.set(entry.slot, &entry.value);
  }
}

fn read_rows<R: Read>(
  reader: R,
  key_columns: usize,
) -> Result<Vec<(Vec<String>, TagEntry)>, TagTableErr> {
  let mut rows = vec![];
  for (i, record) in csv::ReaderBuilder::new()
    .has_headers(false)
    .flexible(true)
    .comment(Some(b'#'))
    .trim(csv::Trim::All)
    .from_reader(reader)
    .into_records()
    .enumerate()
  {
    let record = record?;
    let line = record.position().map(|p| p.line() as usize).unwrap_or(i + 1);
    if record.len() != key_columns + 2 {
      return Err(TagTableErr::InvalidFormatErr(line));
    }
    let keys: Vec<String> = record
      .iter()
      .take(key_columns)
      .map(|c| c.to_string())
      .collect();
    if keys.iter().any(|k| k.is_empty()) {
      return Err(TagTableErr::InvalidFormatErr(line));
    }
    let index = record[key_columns]
      .parse::<usize>()
      .map_err(|e| TagTableErr::ParseIntError(line, e))?;
    let slot = Slot::from_index(index).map_err(|e| TagTableErr::InvalidSlotErr(line, e))?;
    let value = record[key_columns + 1].to_string();
    if value.is_empty() {
      return Err(TagTableErr::InvalidFormatErr(line));
    }
    rows.push((keys, TagEntry { value, slot }));
  }
  Ok(rows)
}

/// Single-key table: `TagMap` (keyed by source tag) or `TokenMap` (keyed by
/// lowercased word).
#[derive(Debug, Default)]
pub struct KeyedTagTable {
  entries: HashMap<String, Vec<TagEntry>>,
  lowercase_keys: bool,
}

pub type TagMap = KeyedTagTable;
pub type TokenMap = KeyedTagTable;

impl KeyedTagTable {
  /// Reads `key,slot,value` rows. Rows sharing a key accumulate in order.
  pub fn from_reader<R: Read>(reader: R, lowercase_keys: bool) -> Result<Self, TagTableErr> {
    let mut table = KeyedTagTable {
      entries: HashMap::new(),
      lowercase_keys,
    };
    for (keys, entry) in read_rows(reader, 1)? {
      let key = if lowercase_keys {
        keys[0].to_lowercase()
      } else {
        keys[0].clone()
      };
      table.entries.entry(key).or_insert_with(Vec::new).push(entry);
    }
    Ok(table)
  }
  pub fn tag_map_from_reader<R: Read>(reader: R) -> Result<TagMap, TagTableErr> {
    KeyedTagTable::from_reader(reader, false)
  }
  pub fn token_map_from_reader<R: Read>(reader: R) -> Result<TokenMap, TagTableErr> {
    KeyedTagTable::from_reader(reader, true)
  }
  pub fn get(&self, key: &str) -> Option<&[TagEntry]> {
    let entries = if self.lowercase_keys {
      self.entries.get(&key.to_lowercase())
    } else {
      self.entries.get(key)
    };
    entries.map(|v| v.as_slice())
  }
  pub fn len(&self) -> usize {
    self.entries.len()
  }
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Table keyed by (lowercased word, source tag).
#[derive(Debug, Default)]
pub struct TokenTagMap {
  entries: HashMap<String, HashMap<String, Vec<TagEntry>>>,
}

impl TokenTagMap {
  pub fn from_reader<R: Read>(reader: R) -> Result<TokenTagMap, TagTableErr> {
    let mut entries: HashMap<String, HashMap<String, Vec<TagEntry>>> = HashMap::new();
    for (keys, entry) in read_rows(reader, 2)? {
      entries
        .entry(keys[0].to_lowercase())
        .or_insert_with(HashMap::new)
        .entry(keys[1].clone())
        .or_insert_with(Vec::new)
        .push(entry);
    }
    Ok(TokenTagMap { entries })
  }
  pub fn get(&self, word: &str, source_tag: &str) -> Option<&[TagEntry]> {
    self
      .entries
      .get(&word.to_lowercase())
      .and_then(|tags| tags.get(source_tag))
      .map(|v| v.as_slice())
  }
  pub fn len(&self) -> usize {
    self.entries.values().map(|tags| tags.len()).sum()
  }
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TAG_MATCH: &str = r#"# punctuation
",",0,Y
",",1,COM
PPIO1,0,P
PPIO1,1,PER
PPIO1,2,SING
"#;

  #[test]
  fn test_tag_map_keeps_row_order() {
    let table = KeyedTagTable::tag_map_from_reader(TAG_MATCH.as_bytes()).unwrap();
    assert_eq!(2, table.len());
    let entries = table.get("PPIO1").unwrap();
    assert_eq!(3, entries.len());
    assert_eq!("P", entries[0].value);
    assert_eq!(Slot::Voice, entries[2].slot);
    assert!(table.get("ppio1").is_none());
    assert_eq!("COM", table.get(",").unwrap()[1].value);
  }

  #[test]
  fn test_token_map_lowercases_keys() {
    let table = KeyedTagTable::token_map_from_reader("Would,0,VM\nwould,1,PRD\n".as_bytes()).unwrap();
    assert_eq!(1, table.len());
    assert_eq!(2, table.get("WOULD").unwrap().len());
  }

  #[test]
  fn test_token_tag_map() {
    let table = TokenTagMap::from_reader("may,VM,0,VM\nmay,VM,1,POS\nher,APPGE,0,D\n".as_bytes()).unwrap();
    assert_eq!(2, table.len());
    assert_eq!(2, table.get("May", "VM").unwrap().len());
    assert!(table.get("may", "NP1").is_none());
  }

  #[test]
  fn test_apply_entries_fills_only_empty_slots() {
    let table = KeyedTagTable::tag_map_from_reader(TAG_MATCH.as_bytes()).unwrap();
    let mut tag = TagVector::default();
    tag.set(Slot::Category, "X");
    apply_entries(table.get("PPIO1").unwrap(), &mut tag);
    assert_eq!("X+PER+SING+++", tag.to_string());
  }

  #[test]
  fn test_invalid_slot() {
    let err = KeyedTagTable::tag_map_from_reader("AT,0,DET\nAT,9,DEF\n".as_bytes())
      .err()
      .unwrap();
    assert_eq!(
      "invalid slot at line 2: slot index 9 is out of range",
      format!("{}", err)
    );
  }

  #[test]
  fn test_invalid_format() {
    let err = KeyedTagTable::tag_map_from_reader("AT,0\n".as_bytes())
      .err()
      .unwrap();
    assert_eq!("invalid format at line 1", format!("{}", err));
  }
}
