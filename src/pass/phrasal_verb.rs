use std::collections::HashSet;

use log::debug;

use super::annotation_pass::{Annotate, AnnotateErr};
use crate::config::{Config, ConfigErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::sentence::Sentence;
use crate::tag_vector::Slot;

const PARTICLE_TAG: &str = "RP";

/// Marks the particle of a verb + particle construction.
///
/// A particle separated from a verb by another verb is left alone, and no
/// later verb in the sentence claims it either. This also drops particles a
/// closer verb would own, as in "want to give up".
pub struct PhrasalVerbDetector {
  range: usize,
}

impl PhrasalVerbDetector {
  pub fn new(range: usize) -> PhrasalVerbDetector {
    PhrasalVerbDetector { range }
  }
  pub fn setup(config: &Config) -> Result<PhrasalVerbDetector, ConfigErr> {
    Ok(PhrasalVerbDetector::new(config.phrasal_verb_range()?))
  }
}

impl Annotate for PhrasalVerbDetector {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    _resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    let mut contested = HashSet::new();
    for i in 0..sentence.len() {
      if !sentence[i].tag_starts_with("V") {
        continue;
      }
      let particle = sentence
        .tail_range(i, self.range)
        .find(|j| sentence[*j].source_tag() == PARTICLE_TAG);
      let particle = match particle {
        Some(p) => p,
        None => continue,
      };
      if (i + 1..particle).any(|j| sentence[j].tag_starts_with("V")) {
        debug!("particle {} blocked by an intervening verb", particle);
        contested.insert(particle);
        continue;
      }
      if contested.contains(&particle) {
        continue;
      }
      let tag = &mut sentence[particle].target_tag;
      tag.set(Slot::Category, "R");
      tag.set(Slot::Subcategory, "PHRV");
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn annotate(text: &str, range: usize) -> Sentence {
    let mut sentence = Sentence::from_tagged(text, "_");
    PhrasalVerbDetector::new(range)
      .annotate(&mut sentence, &LexicalResources::default())
      .unwrap();
    sentence
  }

  #[test]
  fn test_particle_after_determiner() {
    let sentence = annotate("picked_VVD the_AT up_RP", 4);
    assert_eq!("R+PHRV++++", sentence[2].target_tag.to_string());
    assert!(sentence[0].target_tag.is_empty());
  }

  #[test]
  fn test_intervening_verb_blocks_particle() {
    let sentence = annotate("made_VVD look_VV0 up_RP", 4);
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_closer_verb_does_not_claim_blocked_particle() {
    let sentence = annotate("want_VV0 to_TO give_VVI up_RP", 4);
    assert!(sentence[3].target_tag.is_empty());
    let sentence = annotate("to_TO give_VVI up_RP", 4);
    assert_eq!("R+PHRV++++", sentence[2].target_tag.to_string());
  }

  #[test]
  fn test_particle_out_of_range() {
    let sentence = annotate("put_VVD the_AT old_JJ red_JJ hat_NN1 on_RP", 4);
    assert!(sentence[5].target_tag.is_empty());
    let sentence = annotate("put_VVD the_AT old_JJ red_JJ hat_NN1 on_RP", 5);
    assert_eq!("R", sentence[5].target_tag.category);
  }

  #[test]
  fn test_first_particle_only() {
    let sentence = annotate("gave_VVD up_RP over_RP", 4);
    assert_eq!("PHRV", sentence[1].target_tag.subcategory);
    assert!(sentence[2].target_tag.is_empty());
  }
}
