use log::debug;

use super::annotation_pass::{Annotate, AnnotateErr};
use crate::config::{Config, ConfigErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::lexicon_lib::word_set_lexicon::{
  WordSetLexicon, EXTRAPOSED_TO_VERBS, EXTRAPOSING_ADJECTIVES, EXTRAPOSING_VERBS,
  WH_COMPLEMENTIZERS,
};
use crate::sentence::{Sentence, Token};
use crate::tag_vector::Slot;

// Tokens after a complementizer searched for the clause's verb.
const CLAUSE_VERB_RANGE: usize = 6;
// Tag initials that can open a clause whose "that" was deleted.
const THAT_DELETION_INITIALS: &str = "ADNJRMEPZ";
// Fewest tokens that must follow "that" after a noun phrase.
const MIN_THAT_CLAUSE_LENGTH: usize = 3;

/// Finds extraposed clauses with a dummy "it" subject: adjectival predicates
/// ("it is likely that ..."), to-clauses controlled by "take" or "help", and
/// that-clauses after a verb and its object.
pub struct ExtrapositionClassifier {
  range: usize,
}

fn tag_initial_in(token: &Token, initials: &str) -> bool {
  token
    .source_tag()
    .chars()
    .next()
    .map(|c| initials.contains(c))
    .unwrap_or(false)
}

fn has_verb_after(sentence: &Sentence, index: usize) -> bool {
  sentence
    .tail(index, CLAUSE_VERB_RANGE)
    .iter()
    .any(|t| t.tag_starts_with("V"))
}

fn mark_dummy_it(sentence: &mut Sentence, it: usize) {
  let tag = &mut sentence[it].target_tag;
  tag.set(Slot::Category, "P");
  tag.set(Slot::Subcategory, "IM");
  tag.set(Slot::Clause, "3");
  tag.set(Slot::Marker, "EXT");
}

fn mark_clause_head(sentence: &mut Sentence, head: usize, category: &str, subcategory: &str) {
  let tag = &mut sentence[head].target_tag;
  tag.set(Slot::Category, category);
  tag.set(Slot::Subcategory, subcategory);
  tag.set(Slot::Clause, "CLS");
  tag.set(Slot::Marker, "EXT");
}

fn mark_to_head(sentence: &mut Sentence, head: usize) {
  let tag = &mut sentence[head].target_tag;
  tag.set(Slot::Category, "TO");
  tag.set(Slot::Marker, "EXT");
}

/// Category of a wh-word heading a clause, and its genitive marker.
fn wh_category(word: &str) -> (&'static str, Option<&'static str>) {
  match word {
    "how" | "where" | "why" => ("R", None),
    "who" | "whom" => ("P", None),
    "whose" => ("D", Some("GE")),
    _ => ("D", None),
  }
}

impl ExtrapositionClassifier {
  pub fn new(range: usize) -> ExtrapositionClassifier {
    ExtrapositionClassifier { range }
  }
  pub fn setup(config: &Config) -> Result<ExtrapositionClassifier, ConfigErr> {
    Ok(ExtrapositionClassifier::new(config.extraposition_range()?))
  }
  /// A "be" form is lexical when the next token in the window, skipping
  /// adverbs and negation, is not a verb.
  fn is_lexical_be(sentence: &Sentence, be: usize, end: usize) -> bool {
    (be + 1..end)
      .map(|j| &sentence[j])
      .find(|t| !t.tag_starts_with("R") && t.source_tag() != "XX")
      .map(|t| !t.tag_starts_with("V"))
      .unwrap_or(false)
  }
  fn classify(&self, sentence: &mut Sentence, lexicon: &WordSetLexicon, it: usize) {
    let window = sentence.tail_range(it, self.range);
    let end = window.end;
    let mut adjective_verb = None;
    let mut to_verb = None;
    let mut any_verb = None;
    let mut adjective = None;
    let mut noun_before_to = None;
    let mut noun_before_that = None;

    for j in window {
      let token = &sentence[j];
      let word = token.lower();
      if lexicon.contains(EXTRAPOSING_VERBS, &word) {
        adjective_verb = Some(j);
      }
      if lexicon.contains(EXTRAPOSED_TO_VERBS, &word) {
        to_verb = Some(j);
      } else if token.tag_starts_with("VB")
        && ExtrapositionClassifier::is_lexical_be(sentence, j, end)
      {
        adjective_verb = Some(j);
        to_verb = Some(j);
      } else if token.tag_starts_with("VV") {
        any_verb = Some(j);
      } else if to_verb.is_some() && token.tag_starts_with("N") {
        noun_before_to = Some(j);
      } else if any_verb.is_some() && token.tag_starts_with("N") {
        noun_before_that = Some(j);
      } else if adjective_verb.is_some() && lexicon.contains(EXTRAPOSING_ADJECTIVES, &word) {
        adjective = Some(j);
      } else if adjective.is_none() && tag_initial_in(token, "AD") {
        debug!("determiner at {} before any controlling adjective", j);
        return;
      } else if noun_before_that.is_some() && word == "that" {
        self.that_after_noun(sentence, it, j);
        return;
      } else if noun_before_to.is_some() && word == "to" {
        if has_verb_after(sentence, j) {
          mark_dummy_it(sentence, it);
          mark_to_head(sentence, j);
        }
        return;
      } else if adjective.is_some() {
        self.after_adjective(sentence, lexicon, it, j);
        return;
      }
    }
  }
  fn that_after_noun(&self, sentence: &mut Sentence, it: usize, that: usize) {
    let len = sentence.len();
    if len - (that + 1) < MIN_THAT_CLAUSE_LENGTH {
      return;
    }
    let next = &sentence[that + 1];
    let second = &sentence[that + 2];
    if next.tag_starts_with("V") {
      debug!("relative clause with a subject gap at {}", that);
      return;
    }
    if second.tag_starts_with("V") && !tag_initial_in(next, "PN") {
      return;
    }
    if sentence[that - 1].tag_starts_with("C") {
      return;
    }
    mark_dummy_it(sentence, it);
    mark_clause_head(sentence, that, "C", "THT");
  }
  /// Classifies the token following a controlling adjective.
  fn after_adjective(
    &self,
    sentence: &mut Sentence,
    lexicon: &WordSetLexicon,
    it: usize,
    head: usize,
  ) {
    if !has_verb_after(sentence, head) {
      debug!("no clause verb after {}", head);
      return;
    }
    let word = sentence[head].lower();
    if word == "that" {
      mark_clause_head(sentence, head, "C", "THT");
    } else if lexicon.contains(WH_COMPLEMENTIZERS, &word) {
      let (category, genitive) = wh_category(&word);
      mark_clause_head(sentence, head, category, "WH");
      if let Some(genitive) = genitive {
        sentence[head].target_tag.set(Slot::Voice, genitive);
      }
    } else if word == "to" {
      let infinitive = head + 1 < sentence.len() && sentence[head + 1].source_tag().ends_with('I');
      if !infinitive {
        return;
      }
      mark_to_head(sentence, head);
    } else if !tag_initial_in(&sentence[head], THAT_DELETION_INITIALS) {
      return;
    }
    mark_dummy_it(sentence, it);
  }
}

impl Annotate for ExtrapositionClassifier {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    for i in 0..sentence.len() {
      if sentence[i].lower() == "it" {
        self.classify(sentence, &resources.lexicon, i);
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
    ExtrapositionClassifier::new(7)
      .annotate(&mut sentence, &resources)
      .unwrap();
    sentence
  }

  #[test]
  fn test_that_clause_after_adjective() {
    let sentence = annotate("It_PPH1 is_VBZ likely_JJ that_CST he_PPHS1 will_VM come_VVI ._.");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert_eq!("C+THT++CLS+EXT+", sentence[3].target_tag.to_string());
    assert!(sentence[2].target_tag.is_empty());
  }

  #[test]
  fn test_that_deletion_after_adjective() {
    let sentence = annotate("It_PPH1 is_VBZ likely_JJ he_PPHS1 will_VM come_VVI ._.");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert!(sentence[3].target_tag.is_empty());
  }

  #[test]
  fn test_wh_clause_after_adjective() {
    let sentence = annotate("it_PPH1 was_VBDZ clear_JJ whose_DDQGE idea_NN1 it_PPH1 was_VBDZ");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert_eq!("D+WH+GE+CLS+EXT+", sentence[3].target_tag.to_string());
    let sentence = annotate("It_PPH1 is_VBZ odd_JJ how_RGQ they_PPHS2 work_VV0");
    assert_eq!("R+WH++CLS+EXT+", sentence[3].target_tag.to_string());
  }

  #[test]
  fn test_to_clause_after_adjective() {
    let sentence = annotate("It_PPH1 is_VBZ important_JJ to_TO leave_VVI now_RT");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert_eq!("TO++++EXT+", sentence[3].target_tag.to_string());
  }

  #[test]
  fn test_to_clause_after_verb_and_noun() {
    let sentence = annotate("It_PPH1 took_VVD China_NP1 centuries_NNT2 to_TO undo_VVI it_PPH1");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert_eq!("TO++++EXT+", sentence[4].target_tag.to_string());
  }

  #[test]
  fn test_that_clause_after_verb_and_noun() {
    let sentence =
      annotate("It_PPH1 became_VVD obvious_JJ with_IW budgets_NN2 that_CST funding_NN1 was_VBDZ vital_JJ");
    assert_eq!("P+IM++3+EXT+", sentence[0].target_tag.to_string());
    assert_eq!("C+THT++CLS+EXT+", sentence[5].target_tag.to_string());
  }

  #[test]
  fn test_relative_clause_is_not_extraposed() {
    let sentence =
      annotate("It_PPH1 made_VVD noise_NN1 that_CST woke_VVD everyone_PN1 up_RP");
    assert!(sentence[0].target_tag.is_empty());
    assert!(sentence[3].target_tag.is_empty());
    let sentence =
      annotate("It_PPH1 broke_VVD windows_NN2 that_CST hurt_VVD the_AT people_NN inside_RL");
    assert!(sentence[0].target_tag.is_empty());
  }

  #[test]
  fn test_short_that_clause_is_not_extraposed() {
    let sentence = annotate("It_PPH1 told_VVD people_NN that_CST they_PPHS2 won_VVD");
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_that_clause_without_nominal_subject() {
    let sentence =
      annotate("It_PPH1 told_VVD people_NN that_CST only_RR came_VVD to_II us_PPIO2");
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_coordinated_that_is_not_extraposed() {
    let sentence =
      annotate("It_PPH1 made_VVD noise_NN1 and_CC that_CST he_PPHS1 heard_VVD it_PPH1");
    assert!(sentence[0].target_tag.is_empty());
    assert!(sentence[4].target_tag.is_empty());
  }

  #[test]
  fn test_determiner_aborts() {
    let sentence = annotate("It_PPH1 is_VBZ a_AT1 likely_JJ story_NN1 that_CST he_PPHS1 told_VVD");
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_auxiliary_be_is_not_lexical() {
    let sentence = annotate("It_PPH1 is_VBZ raining_VVG and_CC cold_JJ that_CST day_NNT1");
    assert!(sentence[0].target_tag.is_empty());
  }

  #[test]
  fn test_missing_clause_verb() {
    let sentence = annotate("It_PPH1 is_VBZ clear_JJ that_CST ._.");
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }
}
