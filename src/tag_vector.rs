use std::fmt;

use thiserror::Error;

pub const TAG_VECTOR_WIDTH: usize = 6;

pub const SLOT_SEPARATOR: &str = "+";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
  Category = 0,
  Subcategory = 1,
  Voice = 2,
  Clause = 3,
  Marker = 4,
  Form = 5,
}

#[derive(Error, Debug)]
pub enum SlotErr {
  #[error("slot index {0} is out of range")]
  OutOfRangeErr(usize),
}

impl Slot {
  pub const ALL: [Slot; TAG_VECTOR_WIDTH] = [
    Slot::Category,
    Slot::Subcategory,
    Slot::Voice,
    Slot::Clause,
    Slot::Marker,
    Slot::Form,
  ];

  pub fn from_index(index: usize) -> Result<Slot, SlotErr> {
    Slot::ALL
      .get(index)
      .copied()
      .ok_or(SlotErr::OutOfRangeErr(index))
  }
  pub fn index(self) -> usize {
    self as usize
  }
}

/// Fixed-width composite annotation attached to every token.
///
/// Slots are positional in the serialized form, so the field order here is
/// also the output order. An unset slot is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagVector {
  pub category: String,
  pub subcategory: String,
  pub voice: String,
  pub clause: String,
  pub marker: String,
  pub form: String,
}

impl TagVector {
  pub fn get(&self, slot: Slot) -> &str {
    match slot {
      Slot::Category => &self.category,
      Slot::Subcategory => &self.subcategory,
      Slot::Voice => &self.voice,
      Slot::Clause => &self.clause,
      Slot::Marker => &self.marker,
      Slot::Form => &self.form,
    }
  }
  fn get_mut(&mut self, slot: Slot) -> &mut String {
    match slot {
      Slot::Category => &mut self.category,
      Slot::Subcategory => &mut self.subcategory,
      Slot::Voice => &mut self.voice,
      Slot::Clause => &mut self.clause,
      Slot::Marker => &mut self.marker,
      Slot::Form => &mut self.form,
    }
  }
  pub fn set(&mut self, slot: Slot, value: &str) -> bool {
    let current = self.get_mut(slot);
    if !current.is_empty() || value.is_empty() {
      return false;
    }
    current.push_str(value);
    true
  }
  pub fn overwrite(&mut self, slot: Slot, value: &str) {
    let current = self.get_mut(slot);
    current.clear();
    current.push_str(value);
  }
  pub fn fill_from(&mut self, other: &TagVector) {
    for slot in Slot::ALL.iter() {
      self.set(*slot, other.get(*slot));
    }
  }
  pub fn is_empty(&self) -> bool {
    Slot::ALL.iter().all(|slot| self.get(*slot).is_empty())
  }
  pub fn slots(&self) -> [&str; TAG_VECTOR_WIDTH] {
    [
      &self.category,
      &self.subcategory,
      &self.voice,
      &self.clause,
      &self.marker,
      &self.form,
    ]
  }
  /// Slots that are populated in `self` but hold a different value in `after`.
  pub fn changed_slots(&self, after: &TagVector) -> Vec<Slot> {
    Slot::ALL
      .iter()
      .copied()
      .filter(|slot| !self.get(*slot).is_empty() && self.get(*slot) != after.get(*slot))
      .collect()
  }
}

impl fmt::Display for TagVector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.slots().join(SLOT_SEPARATOR))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_vector_renders_all_separators() {
    let tag = TagVector::default();
    assert!(tag.is_empty());
    assert_eq!("+++++", tag.to_string());
    assert_eq!(TAG_VECTOR_WIDTH, tag.slots().len());
  }

  #[test]
  fn test_set_is_write_once() {
    let mut tag = TagVector::default();
    assert!(tag.set(Slot::Category, "VL"));
    assert!(!tag.set(Slot::Category, "VM"));
    assert_eq!("VL", tag.category);
    assert!(!tag.set(Slot::Voice, ""));
    assert_eq!("VL+++++", tag.to_string());
  }

  #[test]
  fn test_overwrite_replaces_value() {
    let mut tag = TagVector::default();
    tag.set(Slot::Category, "VL");
    tag.overwrite(Slot::Category, "VM");
    assert_eq!("VM", tag.get(Slot::Category));
  }

  #[test]
  fn test_fill_from_keeps_populated_slots() {
    let mut tag = TagVector::default();
    tag.set(Slot::Category, "P");
    let mut other = TagVector::default();
    other.set(Slot::Category, "VB");
    other.set(Slot::Voice, "AUX");
    tag.fill_from(&other);
    assert_eq!("P++AUX+++", tag.to_string());
  }

  #[test]
  fn test_slot_from_index() {
    assert_eq!(Slot::Marker, Slot::from_index(4).unwrap());
    assert_eq!(5, Slot::Form.index());
    let err = Slot::from_index(6).err().unwrap();
    assert_eq!("slot index 6 is out of range", format!("{}", err));
  }

  #[test]
  fn test_changed_slots_ignores_new_values() {
    let mut before = TagVector::default();
    before.set(Slot::Category, "VL");
    let mut after = before.clone();
    after.set(Slot::Voice, "BY");
    assert!(before.changed_slots(&after).is_empty());
    after.overwrite(Slot::Category, "VM");
    assert_eq!(vec![Slot::Category], before.changed_slots(&after));
  }
}
