use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplacementTableErr {
  #[error("invalid format at line {0}")]
  InvalidFormatErr(usize),
  #[error("{1} is already defined at line {0}")]
  AlreadyDefinedErr(usize, String),
  #[error("{0} is replaced by {1}, which is itself replaced")]
  ChainedReplacementErr(String, String),
  #[error("{0}")]
  CSVError(#[from] csv::Error),
}

/// One-to-one source tag rewrites. No replacement target is itself a key, so
/// rewriting is idempotent.
#[derive(Debug, Default)]
pub struct ReplacementTable {
  replacements: HashMap<String, String>,
}

impl ReplacementTable {
  pub fn from_reader<R: Read>(reader: R) -> Result<ReplacementTable, ReplacementTableErr> {
    let mut replacements = HashMap::new();
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
      if record.len() != 2 || record[0].is_empty() || record[1].is_empty() {
        return Err(ReplacementTableErr::InvalidFormatErr(line));
      }
      let from = record[0].to_string();
      if replacements.contains_key(&from) {
        return Err(ReplacementTableErr::AlreadyDefinedErr(line, from));
      }
      replacements.insert(from, record[1].to_string());
    }
    for (from, to) in replacements.iter() {
      if from != to && replacements.contains_key(to) {
        return Err(ReplacementTableErr::ChainedReplacementErr(
          from.clone(),
          to.clone(),
        ));
      }
    }
    Ok(ReplacementTable { replacements })
  }
  /// The canonical form of `tag`; identity when the table has no entry.
  pub fn replace<'a>(&'a self, tag: &'a str) -> &'a str {
    self.replacements.get(tag).map(|t| t.as_str()).unwrap_or(tag)
  }
  pub fn len(&self) -> usize {
    self.replacements.len()
  }
  pub fn is_empty(&self) -> bool {
    self.replacements.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_replace() {
    let table = ReplacementTable::from_reader("II21,II\nII22,II\n".as_bytes()).unwrap();
    assert_eq!(2, table.len());
    assert_eq!("II", table.replace("II21"));
    assert_eq!("NN1", table.replace("NN1"));
  }

  #[test]
  fn test_chained_replacement() {
    let err = ReplacementTable::from_reader("A,B\nB,C\n".as_bytes())
      .err()
      .unwrap();
    assert_eq!("A is replaced by B, which is itself replaced", format!("{}", err));
  }

  #[test]
  fn test_duplicated_lines() {
    let err = ReplacementTable::from_reader("A,B\nA,C\n".as_bytes())
      .err()
      .unwrap();
    assert_eq!("A is already defined at line 2", format!("{}", err));
  }
}
