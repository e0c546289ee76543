use super::annotation_pass::{Annotate, AnnotateErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::sentence::Sentence;
use crate::tag_vector::Slot;

pub struct ProperNounClassifier;

impl Annotate for ProperNounClassifier {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    _resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    for token in sentence.iter_mut() {
      let number = match token.source_tag() {
        "NP" | "NP1" => "SING",
        "NP2" => "PLUR",
        _ => continue,
      };
      let tag = &mut token.target_tag;
      tag.set(Slot::Category, "N");
      tag.set(Slot::Subcategory, "PROP");
      tag.set(Slot::Voice, number);
    }
    Ok(())
  }
}
