use super::annotation_pass::{Annotate, AnnotateErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::lexicon_lib::word_set_lexicon::{
  WordSetLexicon, NECESSITY_MODALS, POSSIBILITY_MODALS, PREDICTION_MODALS,
};
use crate::sentence::{Sentence, Token};
use crate::tag_vector::Slot;

const MODAL_TAG: &str = "VM";
const INFINITIVE_MARKER_TAG: &str = "TO";

const MODAL_CLASSES: [(&str, &str); 3] = [
  (NECESSITY_MODALS, "NEC"),
  (POSSIBILITY_MODALS, "POS"),
  (PREDICTION_MODALS, "PRD"),
];

/// Classifies single-word modals and multi-word modal phrases ("have to",
/// "is going to") by semantic type.
///
/// Multi-word matches overwrite what earlier passes wrote on the tokens they
/// span; when two templates cover the same token the later one wins.
pub struct ModalClassifier;

fn single_word_class(token: &Token, word: &str, lexicon: &WordSetLexicon) -> Option<&'static str> {
  let licensed =
    token.source_tag() == MODAL_TAG || (word == "better" && token.tag_starts_with("VV"));
  if !licensed {
    return None;
  }
  MODAL_CLASSES
    .iter()
    .find(|(category, _)| lexicon.contains_single(category, word))
    .map(|(_, subcategory)| *subcategory)
}

/// Positions spanned by `template` anchored at `i`, if it matches.
///
/// Two-word templates need the next token to be an infinitive marker or the
/// token after it to be an infinitive. Longer templates allow one token
/// between the anchor and the rest of the phrase.
fn match_template(
  sentence: &Sentence,
  words: &[String],
  i: usize,
  template: &[String],
) -> Option<Vec<usize>> {
  if template.len() < 2 || template[0] != words[i] {
    return None;
  }
  let len = words.len();
  if template.len() == 2 {
    let next = i + 1;
    if next >= len || words[next] != template[1] {
      return None;
    }
    let infinitive = sentence[next].source_tag() == INFINITIVE_MARKER_TAG
      || (next + 1 < len && sentence[next + 1].source_tag().ends_with('I'));
    return if infinitive { Some(vec![i, next]) } else { None };
  }
  let rest = &template[1..];
  [i + 1, i + 2]
    .iter()
    .copied()
    .find(|start| start + rest.len() <= len && words[*start..*start + rest.len()] == *rest)
    .map(|start| {
      let mut positions = vec![i];
      positions.extend(start..start + rest.len());
      positions
    })
}

impl Annotate for ModalClassifier {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    let lexicon = &resources.lexicon;
    let words: Vec<String> = sentence.iter().map(|t| t.lower()).collect();
    for i in 0..sentence.len() {
      if let Some(subcategory) = single_word_class(&sentence[i], &words[i], lexicon) {
        let tag = &mut sentence[i].target_tag;
        tag.set(Slot::Category, "VM");
        tag.set(Slot::Subcategory, subcategory);
        continue;
      }
      for (category, subcategory) in MODAL_CLASSES.iter() {
        for template in lexicon.sequences(category) {
          if let Some(positions) = match_template(sentence, &words, i, template) {
            for p in positions {
              let tag = &mut sentence[p].target_tag;
              tag.overwrite(Slot::Category, "VM");
              tag.overwrite(Slot::Subcategory, subcategory);
              tag.overwrite(Slot::Marker, "MULTI");
            }
          }
        }
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;

  fn annotate(sentence: &mut Sentence) {
    let resources = LexicalResources::setup(&Config::empty().unwrap()).unwrap();
    ModalClassifier.annotate(sentence, &resources).unwrap();
  }

  #[test]
  fn test_single_word_modals() {
    let mut sentence = Sentence::from_tagged("you_PPY must_VM go_VVI but_CCB may_VM not_XX", "_");
    annotate(&mut sentence);
    assert_eq!("VM+NEC++++", sentence[1].target_tag.to_string());
    assert_eq!("VM+POS++++", sentence[4].target_tag.to_string());
    assert!(sentence[2].target_tag.is_empty());
  }

  #[test]
  fn test_modal_word_needs_modal_tag() {
    let mut sentence = Sentence::from_tagged("the_AT will_NN1 of_IO the_AT people_NN", "_");
    annotate(&mut sentence);
    assert!(sentence[1].target_tag.is_empty());
  }

  #[test]
  fn test_going_to() {
    let mut sentence = Sentence::from_tagged("she_PPHS1 is_VBZ going_VVGK to_TO leave_VVI", "_");
    annotate(&mut sentence);
    for i in 1..4 {
      assert_eq!("VM+PRD+++MULTI+", sentence[i].target_tag.to_string());
    }
    assert!(sentence[4].target_tag.is_empty());
  }

  #[test]
  fn test_gap_before_phrase() {
    let mut sentence = Sentence::from_tagged("he_PPHS1 is_VBZ not_XX able_JK to_TO swim_VVI", "_");
    annotate(&mut sentence);
    assert_eq!("VM+POS+++MULTI+", sentence[1].target_tag.to_string());
    assert!(sentence[2].target_tag.is_empty());
    assert_eq!("MULTI", sentence[3].target_tag.marker);
    assert_eq!("MULTI", sentence[4].target_tag.marker);
  }

  #[test]
  fn test_two_word_templates() {
    let mut sentence = Sentence::from_tagged("we_PPIS2 have_VH0 to_TO win_VVI", "_");
    annotate(&mut sentence);
    assert_eq!("VM+NEC+++MULTI+", sentence[1].target_tag.to_string());
    assert_eq!("VM+NEC+++MULTI+", sentence[2].target_tag.to_string());

    let mut sentence = Sentence::from_tagged("you_PPY had_VHD better_VV0 go_VVI", "_");
    annotate(&mut sentence);
    assert_eq!("VM+NEC+++MULTI+", sentence[1].target_tag.to_string());
    assert_eq!("VM+NEC+++MULTI+", sentence[2].target_tag.to_string());

    let mut sentence = Sentence::from_tagged("I_PPIS1 have_VH0 to_II the_AT shop_NN1", "_");
    annotate(&mut sentence);
    assert!(sentence[1].target_tag.is_empty());
  }

  #[test]
  fn test_multi_word_overwrites_earlier_passes() {
    let mut sentence = Sentence::from_tagged("it_PPH1 is_VBZ supposed_VVN to_TO rain_VVI", "_");
    sentence[1].target_tag.set(Slot::Category, "VBZ");
    sentence[2].target_tag.set(Slot::Category, "VL");
    sentence[2].target_tag.set(Slot::Voice, "AGLS");
    annotate(&mut sentence);
    assert_eq!("VM+NEC+++MULTI+", sentence[1].target_tag.to_string());
    assert_eq!("VM+NEC+AGLS++MULTI+", sentence[2].target_tag.to_string());
  }
}
