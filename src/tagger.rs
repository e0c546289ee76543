use std::sync::Arc;

use log::{debug, log_enabled, Level};
use thiserror::Error;

use super::lexicon_lib::lexical_resources::LexicalResources;
use super::pass::annotation_pass::{Annotate, AnnotateErr, AnnotationPass};
use super::sentence::Sentence;
use super::tag_vector::TagVector;

#[derive(Error, Debug)]
pub enum TaggerErr {
  #[error("sentence returned by {pass} is malformed at {indices:?}")]
  MalformedPassResult { pass: String, indices: Vec<usize> },
  #[error("{0}")]
  AnnotateErr(#[from] AnnotateErr),
}

pub trait CanTag {
  fn parse(&self, sentence: Sentence) -> Result<Sentence, TaggerErr>;
  fn parse_pairs<W: AsRef<str>, T: AsRef<str>>(
    &self,
    pairs: &[(W, T)],
  ) -> Result<Sentence, TaggerErr> {
    self.parse(Sentence::from_pairs(pairs))
  }
}

impl<'a, C: CanTag + ?Sized> CanTag for &'a C {
  fn parse(&self, sentence: Sentence) -> Result<Sentence, TaggerErr> {
    (**self).parse(sentence)
  }
}

/// Runs the annotation passes over one sentence at a time.
///
/// Cloning is cheap; every clone shares the same read-only resources.
#[derive(Clone)]
pub struct Tagger {
  resources: Arc<LexicalResources>,
  passes: Arc<Vec<AnnotationPass>>,
}

/// Indices where `after` breaks the contract of `pass` relative to `before`.
fn malformed_indices(pass: &AnnotationPass, before: &Sentence, after: &Sentence) -> Vec<usize> {
  if before.len() != after.len() {
    let (short, long) = if before.len() < after.len() {
      (before.len(), after.len())
    } else {
      (after.len(), before.len())
    };
    return (short..long).collect();
  }
  before
    .iter()
    .zip(after.iter())
    .enumerate()
    .filter(|(_, (b, a))| {
      b.word() != a.word()
        || (!pass.rewrites_source_tags() && b.source_tag() != a.source_tag())
        || (!pass.may_overwrite() && !b.target_tag.changed_slots(&a.target_tag).is_empty())
    })
    .map(|(i, _)| i)
    .collect()
}

fn log_sentence(name: &str, sentence: &Sentence) {
  if !log_enabled!(Level::Debug) {
    return;
  }
  for (i, token) in sentence.iter().enumerate() {
    debug!("{} {}: {} {} {}", name, i, token.word(), token.source_tag(), token.target_tag);
  }
}

impl Tagger {
  pub fn new(resources: &Arc<LexicalResources>, passes: &Arc<Vec<AnnotationPass>>) -> Tagger {
    Tagger {
      resources: Arc::clone(resources),
      passes: Arc::clone(passes),
    }
  }
  pub fn resources(&self) -> &LexicalResources {
    &self.resources
  }
  pub fn pass_names(&self) -> Vec<&'static str> {
    self.passes.iter().map(|p| p.name()).collect()
  }
}

impl CanTag for Tagger {
  fn parse(&self, mut sentence: Sentence) -> Result<Sentence, TaggerErr> {
    for token in sentence.iter_mut() {
      token.target_tag = TagVector::default();
    }
    for pass in self.passes.iter() {
      let before = sentence.clone();
      pass.annotate(&mut sentence, &self.resources)?;
      let indices = malformed_indices(pass, &before, &sentence);
      if !indices.is_empty() {
        return Err(TaggerErr::MalformedPassResult {
          pass: pass.name().to_string(),
          indices,
        });
      }
      log_sentence(pass.name(), &sentence);
    }
    Ok(sentence)
  }
}
