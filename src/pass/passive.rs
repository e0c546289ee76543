use log::debug;

use super::annotation_pass::{Annotate, AnnotateErr};
use crate::config::{Config, ConfigErr};
use crate::lexicon_lib::auxiliary::{auxiliary_tag, is_auxiliary, is_get_form};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::lexicon_lib::word_set_lexicon::{POST_NOMINAL_DOMAINS, POST_NOMINAL_EXCEPTIONS};
use crate::sentence::{Sentence, Token};
use crate::tag_vector::Slot;

const PARTICIPLE_TAG: &str = "VVN";
const EXISTENTIAL_THERE_TAG: &str = "EX";
// Maximum distance from an existential "there" to the participle for a
// question to still read as a post-nominal modifier.
const EXISTENTIAL_THERE_RANGE: usize = 8;

/// Classifies past participles as main-clause passives or as passive
/// post-nominal modifiers (reduced relatives).
pub struct PassiveClassifier {
  range: usize,
}

fn is_trigger(token: &Token) -> bool {
  token.tag_starts_with("VB") || is_get_form(token.word())
}

fn is_nominal_prefix(prefix: &str) -> bool {
  prefix.len() > 1 && prefix.starts_with('N')
}

/// Writes the post-nominal modifier reading onto the participle at `verb`.
fn mark_post_nominal(
  sentence: &mut Sentence,
  resources: &LexicalResources,
  trigger: usize,
  verb: usize,
) {
  let that_absent = !sentence.tokens()[trigger + 1..verb]
    .iter()
    .any(|t| t.lower() == "that");
  let domain = resources
    .lexicon
    .group_of(POST_NOMINAL_DOMAINS, sentence[verb].word());
  let tag = &mut sentence[verb].target_tag;
  tag.set(Slot::Category, "VL");
  tag.set(Slot::Clause, "PNM");
  tag.set(Slot::Form, "XVBN");
  if let Some(domain) = domain {
    tag.set(Slot::Subcategory, domain);
  }
  if that_absent {
    tag.set(Slot::Marker, "THTDEL");
  }
}

impl PassiveClassifier {
  pub fn new(range: usize) -> PassiveClassifier {
    PassiveClassifier { range }
  }
  pub fn setup(config: &Config) -> Result<PassiveClassifier, ConfigErr> {
    Ok(PassiveClassifier::new(config.passive_range()?))
  }
  /// Auxiliary-anchored path; `existential_there` is the last "there" seen
  /// at or before `aux`.
  fn annotate_auxiliary(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
    aux: usize,
    existential_there: Option<usize>,
  ) -> Result<(), AnnotateErr> {
    let main_verbs: Vec<usize> = sentence
      .tail_range(aux, self.range)
      .filter(|j| sentence[*j].source_tag() == PARTICIPLE_TAG)
      .collect();
    let (first, last) = match (main_verbs.first(), main_verbs.last()) {
      (Some(first), Some(last)) => (*first, *last),
      _ => return Ok(()),
    };
    let rest = sentence.rest(last);
    let question = rest.iter().any(|t| t.word() == "?");
    let by_phrase = rest.iter().any(|t| t.lower() == "by");
    let gap: Vec<&str> = sentence.tokens()[aux + 1..first]
      .iter()
      .map(|t| t.tag_prefix())
      .collect();

    let post_nominal = match gap.last() {
      None => false,
      Some(prefix) if is_nominal_prefix(prefix) => {
        if !question {
          true
        } else if existential_there
          .map(|ex| last - ex < EXISTENTIAL_THERE_RANGE)
          .unwrap_or(false)
        {
          true
        } else if main_verbs.len() > 1 {
          false
        } else {
          resources
            .lexicon
            .contains(POST_NOMINAL_EXCEPTIONS, sentence[first].word())
        }
      }
      Some(_) => {
        if let Some(perfect) = gap.iter().position(|p| *p == "VH") {
          match gap.iter().position(|p| *p == "VB") {
            Some(be) if be > perfect => {}
            _ => {
              debug!("perfect aspect at {}, not passive", aux);
              return Ok(());
            }
          }
        }
        false
      }
    };

    for verb in main_verbs {
      if post_nominal {
        mark_post_nominal(sentence, resources, aux, verb);
      } else {
        let tag = &mut sentence[verb].target_tag;
        tag.set(Slot::Category, "VL");
        tag.set(Slot::Voice, if by_phrase { "BY" } else { "AGLS" });
        tag.set(Slot::Form, "XVBN");
      }
    }
    if !post_nominal && is_auxiliary(sentence[aux].word()) {
      let aux_tag = auxiliary_tag(sentence[aux].word())?;
      sentence[aux].target_tag.fill_from(&aux_tag);
    }
    Ok(())
  }
  /// Noun-anchored path for reduced relatives with no auxiliary.
  fn annotate_noun(&self, sentence: &mut Sentence, resources: &LexicalResources, noun: usize) {
    let window = sentence.tail_range(noun, self.range);
    let tokens = &sentence.tokens()[window.clone()];
    if tokens.iter().any(|t| t.target_tag.category == "VL") {
      return;
    }
    if tokens.iter().any(|t| {
      t.source_tag() != PARTICIPLE_TAG && (t.tag_starts_with("N") || t.tag_starts_with("V"))
    }) {
      return;
    }
    let main_verbs: Vec<usize> = window
      .filter(|j| sentence[*j].source_tag() == PARTICIPLE_TAG)
      .collect();
    for verb in main_verbs {
      mark_post_nominal(sentence, resources, noun, verb);
    }
  }
}

impl Annotate for PassiveClassifier {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    let mut existential_there = None;
    for i in 0..sentence.len() {
      if sentence[i].source_tag() == EXISTENTIAL_THERE_TAG {
        existential_there = Some(i);
      }
      if is_trigger(&sentence[i]) {
        self.annotate_auxiliary(sentence, resources, i, existential_there)?;
      } else if sentence[i].tag_starts_with("N") {
        self.annotate_noun(sentence, resources, i);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn annotate(text: &str) -> Sentence {
    let resources = LexicalResources::setup(&Config::empty().unwrap()).unwrap();
    let mut sentence = Sentence::from_tagged(text, "_");
    PassiveClassifier::new(4)
      .annotate(&mut sentence, &resources)
      .unwrap();
    sentence
  }

  #[test]
  fn test_agentless_passive() {
    let sentence = annotate("It_PPH1 was_VBDZ reported_VVN that_CST he_PPHS1 left_VVD ._.");
    assert_eq!("VL++AGLS+++XVBN", sentence[2].target_tag.to_string());
    assert_eq!("VBD+BEDZ+AUX+++", sentence[1].target_tag.to_string());
  }

  #[test]
  fn test_by_passive() {
    let sentence = annotate("the_AT report_NN1 was_VBDZ requested_VVN by_II the_AT board_NN1");
    assert_eq!("VL++BY+++XVBN", sentence[3].target_tag.to_string());
    assert_eq!("VBD+BEDZ+AUX+++", sentence[2].target_tag.to_string());
    assert!(sentence[1].target_tag.is_empty());
  }

  #[test]
  fn test_noun_anchored_post_nominal() {
    let sentence = annotate("the_AT man_NN1 reported_VVN missing_VVN");
    assert_eq!("VL", sentence[3].target_tag.category);
    assert_eq!("PNM", sentence[3].target_tag.clause);
    assert_eq!("VL+PUB++PNM+THTDEL+XVBN", sentence[2].target_tag.to_string());
  }

  #[test]
  fn test_noun_path_blocked_by_verb() {
    let sentence = annotate("the_AT man_NN1 seemed_VVD tired_VVN");
    assert!(sentence[3].target_tag.is_empty());
  }

  #[test]
  fn test_post_nominal_after_auxiliary_and_noun() {
    let sentence = annotate("There_EX were_VBDR changes_NN2 requested_VVN by_II staff_NN");
    assert_eq!("VL+SUA++PNM+THTDEL+XVBN", sentence[3].target_tag.to_string());
    assert!(sentence[1].target_tag.is_empty());
  }

  #[test]
  fn test_question_with_existential_there() {
    let sentence = annotate("Are_VBR there_EX any_DD files_NN2 deleted_VVN ?_?");
    assert_eq!("VL++AGLS+++XVBN", sentence[4].target_tag.to_string());
    assert_eq!("VB+BER+AUX+++", sentence[0].target_tag.to_string());
    let sentence = annotate("There_EX is_VBZ the_AT file_NN1 deleted_VVN ?_?");
    assert_eq!("PNM", sentence[4].target_tag.clause);
  }

  #[test]
  fn test_passive_question() {
    let sentence = annotate("Was_VBDZ the_AT file_NN1 deleted_VVN ?_?");
    assert_eq!("VL++AGLS+++XVBN", sentence[3].target_tag.to_string());
    assert_eq!("VBD+BEDZ+AUX+++", sentence[0].target_tag.to_string());
  }

  #[test]
  fn test_question_with_exception_word() {
    let sentence = annotate("Was_VBDZ the_AT money_NN1 donated_VVN ?_?");
    assert_eq!("PNM", sentence[3].target_tag.clause);
  }

  #[test]
  fn test_coordinated_participles() {
    let sentence = annotate("it_PPH1 was_VBDZ washed_VVN and_CC dried_VVN");
    assert_eq!("AGLS", sentence[2].target_tag.voice);
    assert_eq!("AGLS", sentence[4].target_tag.voice);
  }

  #[test]
  fn test_question_with_coordinated_participles() {
    let sentence = annotate("Were_VBDR cars_NN2 washed_VVN dried_VVN ?_?");
    assert_eq!("VL++AGLS+++XVBN", sentence[2].target_tag.to_string());
    assert_eq!("VL++AGLS+++XVBN", sentence[3].target_tag.to_string());
    assert_eq!("VBD+BED+AUX+++", sentence[0].target_tag.to_string());
    let sentence = annotate("Were_VBDR cars_NN2 washed_VVN dried_VVN by_II hand_NN1 ?_?");
    assert_eq!("BY", sentence[2].target_tag.voice);
    assert_eq!("BY", sentence[3].target_tag.voice);
    assert!(sentence[3].target_tag.clause.is_empty());
  }

  #[test]
  fn test_post_nominal_with_that_keeps_marker_empty() {
    let sentence = annotate("There_EX were_VBDR that_DD1 many_DA2 changes_NN2 requested_VVN");
    assert_eq!("VL+SUA++PNM++XVBN", sentence[5].target_tag.to_string());
    assert!(sentence[5].target_tag.marker.is_empty());
  }

  #[test]
  fn test_perfect_aspect_is_skipped() {
    let sentence = annotate("What_DDQ is_VBZ it_PPH1 has_VHZ done_VVN");
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_get_passive() {
    let sentence = annotate("he_PPHS1 got_VVD fired_VVN");
    assert_eq!("VL++AGLS+++XVBN", sentence[2].target_tag.to_string());
    assert_eq!("VBD+GOT+AUX+++", sentence[1].target_tag.to_string());
  }

  #[test]
  fn test_unknown_be_form_is_not_backfilled() {
    let sentence = annotate("thou_PPY wast_VBDZ chosen_VVN");
    assert_eq!("AGLS", sentence[2].target_tag.voice);
    assert!(sentence[1].target_tag.is_empty());
  }
}
