use std::collections::HashMap;

use lazy_static::lazy_static;
use thiserror::Error;

use crate::tag_vector::TagVector;

/// Word forms of "get" that can head a passive.
pub const GET_FORMS: [&str; 5] = ["get", "gets", "got", "gotten", "getting"];

#[derive(Error, Debug)]
pub enum AuxiliaryErr {
  #[error("{0} is not an auxiliary word form")]
  InvalidAuxiliaryWord(String),
}

fn aux(category: &str, subcategory: &str, marker: &str, form: &str) -> TagVector {
  TagVector {
    category: category.to_string(),
    subcategory: subcategory.to_string(),
    voice: String::from("AUX"),
    clause: String::new(),
    marker: marker.to_string(),
    form: form.to_string(),
  }
}

lazy_static! {
  static ref AUXILIARY_TAGS: HashMap<&'static str, TagVector> = {
    let mut m = HashMap::new();
    m.insert("are", aux("VB", "BER", "", ""));
    m.insert("'re", aux("VB", "BER", "0", ""));
    m.insert("is", aux("VBZ", "BEZ", "", ""));
    m.insert("'s", aux("VBZ", "BEZ", "0", ""));
    m.insert("am", aux("VB", "BEM", "", ""));
    m.insert("'m", aux("VB", "BEM", "0", ""));
    m.insert("was", aux("VBD", "BEDZ", "", ""));
    m.insert("were", aux("VBD", "BED", "", ""));
    m.insert("be", aux("VB", "BE", "", ""));
    m.insert("been", aux("VPRF", "BEN", "", "XVBN"));
    m.insert("being", aux("VBG", "BG", "", "XVBG"));
    m.insert("get", aux("VB", "GET", "", ""));
    m.insert("gets", aux("VBZ", "GETZ", "", ""));
    m.insert("got", aux("VBD", "GOT", "", ""));
    m.insert("gotten", aux("VPRF", "GOTN", "", "XVBN"));
    m.insert("getting", aux("VBG", "GETG", "", "XVBG"));
    m
  };
}

pub fn is_auxiliary(word: &str) -> bool {
  AUXILIARY_TAGS.contains_key(word.to_lowercase().as_str())
}

pub fn is_get_form(word: &str) -> bool {
  let word = word.to_lowercase();
  GET_FORMS.iter().any(|w| *w == word)
}

/// Tense, aspect and contraction markers for a "be" or "get" auxiliary.
pub fn auxiliary_tag(word: &str) -> Result<TagVector, AuxiliaryErr> {
  AUXILIARY_TAGS
    .get(word.to_lowercase().as_str())
    .cloned()
    .ok_or_else(|| AuxiliaryErr::InvalidAuxiliaryWord(word.to_string()))
}
