use super::annotation_pass::{Annotate, AnnotateErr};
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::lexicon_lib::tag_table::apply_entries;
use crate::sentence::Sentence;

/// Fills tokens no earlier pass touched from the static tables: by source
/// tag, else by word, else by word and tag.
pub struct StaticFallbackMatcher;

impl Annotate for StaticFallbackMatcher {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    for token in sentence.iter_mut() {
      if !token.target_tag.is_empty() {
        continue;
      }
      let entries = resources
        .tag_map
        .get(token.source_tag())
        .or_else(|| resources.token_map.get(token.word()))
        .or_else(|| resources.token_tag_map.get(token.word(), token.source_tag()));
      if let Some(entries) = entries {
        apply_entries(entries, &mut token.target_tag);
      }
    }
    Ok(())
  }
}
