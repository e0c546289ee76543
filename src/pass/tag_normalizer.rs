use super::annotation_pass::{Annotate, AnnotateErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::sentence::Sentence;

/// Collapses source tag variants (ditto tags and the like) to their canonical
/// form before any other pass looks at them.
pub struct TagNormalizer;

impl Annotate for TagNormalizer {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    for token in sentence.iter_mut() {
      let replaced = resources.replacements.replace(token.source_tag());
      if replaced != token.source_tag() {
        let replaced = replaced.to_string();
        token.set_source_tag(&replaced);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lexicon_lib::replacement_table::ReplacementTable;

  fn build_resources() -> LexicalResources {
    LexicalResources {
      replacements: ReplacementTable::from_reader("II21,II\nII22,II\nRR21,RR\nRR22,RR\n".as_bytes())
        .unwrap(),
      ..Default::default()
    }
  }

  #[test]
  fn test_annotate() {
    let resources = build_resources();
    let mut sentence = Sentence::from_tagged("because_II21 of_II22 it_PPH1", "_");
    TagNormalizer.annotate(&mut sentence, &resources).unwrap();
    let tags: Vec<&str> = sentence.iter().map(|t| t.source_tag()).collect();
    assert_eq!(vec!["II", "II", "PPH1"], tags);
    assert!(sentence.iter().all(|t| t.target_tag.is_empty()));
  }

  #[test]
  fn test_annotate_is_idempotent() {
    let resources = build_resources();
    let mut once = Sentence::from_tagged("of_RR21 course_RR22 ._.", "_");
    TagNormalizer.annotate(&mut once, &resources).unwrap();
    let mut twice = once.clone();
    TagNormalizer.annotate(&mut twice, &resources).unwrap();
    assert_eq!(once, twice);
  }
}
