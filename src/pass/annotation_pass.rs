use serde_json::Value;
use thiserror::Error;

use super::extraposition::ExtrapositionClassifier;
use super::modal::ModalClassifier;
use super::passive::PassiveClassifier;
use super::phrasal_verb::PhrasalVerbDetector;
use super::proper_noun::ProperNounClassifier;
use super::static_fallback::StaticFallbackMatcher;
use super::tag_normalizer::TagNormalizer;
use crate::config::{Config, ConfigErr, ANNOTATION_PASS};
use crate::lexicon_lib::auxiliary::AuxiliaryErr;
use crate::lexicon_lib::lexical_resources::LexicalResources;
use crate::sentence::Sentence;

pub enum AnnotationPass {
  TagNormalizer(TagNormalizer),
  PhrasalVerbDetector(PhrasalVerbDetector),
  PassiveClassifier(PassiveClassifier),
  ExtrapositionClassifier(ExtrapositionClassifier),
  ProperNounClassifier(ProperNounClassifier),
  ModalClassifier(ModalClassifier),
  StaticFallbackMatcher(StaticFallbackMatcher),
}

pub trait Annotate {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr>;
}

#[derive(Error, Debug)]
pub enum AnnotateErr {
  #[error("{0}")]
  AuxiliaryErr(#[from] AuxiliaryErr),
}

#[derive(Error, Debug)]
pub enum AnnotationPassGetErr {
  #[error("{0} is invalid AnnotationPass class")]
  InvalidClassErr(String),
  #[error("config file is invalid format")]
  InvalidFormatErr,
  #[error("{0} must not run after {1}")]
  OutOfOrderErr(String, String),
  #[error("{0}")]
  ConfigErr(#[from] ConfigErr),
}

/// Class names in the order the passes have to run.
pub const PASS_CLASSES: [&str; 7] = [
  "TagNormalizer",
  "PhrasalVerbDetector",
  "PassiveClassifier",
  "ExtrapositionClassifier",
  "ProperNounClassifier",
  "ModalClassifier",
  "StaticFallbackMatcher",
];

impl AnnotationPass {
  fn rank(&self) -> usize {
    match self {
      AnnotationPass::TagNormalizer(_) => 0,
      AnnotationPass::PhrasalVerbDetector(_) => 1,
      AnnotationPass::PassiveClassifier(_) => 2,
      AnnotationPass::ExtrapositionClassifier(_) => 3,
      AnnotationPass::ProperNounClassifier(_) => 4,
      AnnotationPass::ModalClassifier(_) => 5,
      AnnotationPass::StaticFallbackMatcher(_) => 6,
    }
  }
  pub fn name(&self) -> &'static str {
    PASS_CLASSES[self.rank()]
  }
  /// Multi-word modals are the one place a populated slot may be rewritten.
  pub fn may_overwrite(&self) -> bool {
    matches!(self, AnnotationPass::ModalClassifier(_))
  }
  pub fn rewrites_source_tags(&self) -> bool {
    matches!(self, AnnotationPass::TagNormalizer(_))
  }
}

impl Annotate for AnnotationPass {
  fn annotate(
    &self,
    sentence: &mut Sentence,
    resources: &LexicalResources,
  ) -> Result<(), AnnotateErr> {
    match self {
      AnnotationPass::TagNormalizer(pass) => pass.annotate(sentence, resources),
      AnnotationPass::PhrasalVerbDetector(pass) => pass.annotate(sentence, resources),
      AnnotationPass::PassiveClassifier(pass) => pass.annotate(sentence, resources),
      AnnotationPass::ExtrapositionClassifier(pass) => pass.annotate(sentence, resources),
      AnnotationPass::ProperNounClassifier(pass) => pass.annotate(sentence, resources),
      AnnotationPass::ModalClassifier(pass) => pass.annotate(sentence, resources),
      AnnotationPass::StaticFallbackMatcher(pass) => pass.annotate(sentence, resources),
    }
  }
}

fn get_annotation_pass(config: &Config, class: &str) -> Result<AnnotationPass, AnnotationPassGetErr> {
  Ok(match class {
    "TagNormalizer" => AnnotationPass::TagNormalizer(TagNormalizer),
    "PhrasalVerbDetector" => AnnotationPass::PhrasalVerbDetector(PhrasalVerbDetector::setup(config)?),
    "PassiveClassifier" => AnnotationPass::PassiveClassifier(PassiveClassifier::setup(config)?),
    "ExtrapositionClassifier" => {
      AnnotationPass::ExtrapositionClassifier(ExtrapositionClassifier::setup(config)?)
    }
    "ProperNounClassifier" => AnnotationPass::ProperNounClassifier(ProperNounClassifier),
    "ModalClassifier" => AnnotationPass::ModalClassifier(ModalClassifier),
    "StaticFallbackMatcher" => AnnotationPass::StaticFallbackMatcher(StaticFallbackMatcher),
    _ => return Err(AnnotationPassGetErr::InvalidClassErr(class.to_string())),
  })
}

/// Builds the passes listed under `annotationPass`, or all of them when the
/// setting is absent. A listed subset must keep the canonical order.
pub fn get_annotation_passes(config: &Config) -> Result<Vec<AnnotationPass>, AnnotationPassGetErr> {
  let mut passes: Vec<AnnotationPass> = vec![];
  match config.settings.get(ANNOTATION_PASS) {
    None | Some(Value::Null) => {
      for class in PASS_CLASSES.iter() {
        passes.push(get_annotation_pass(config, class)?);
      }
    }
    Some(Value::Array(arr)) => {
      for v in arr {
        let pass = if let Some(Value::String(class)) = v.get("class") {
          get_annotation_pass(config, class)?
        } else {
          return Err(AnnotationPassGetErr::InvalidFormatErr);
        };
        if let Some(prev) = passes.last() {
          if prev.rank() >= pass.rank() {
            return Err(AnnotationPassGetErr::OutOfOrderErr(
              pass.name().to_string(),
              prev.name().to_string(),
            ));
          }
        }
        passes.push(pass);
      }
    }
    Some(_) => return Err(AnnotationPassGetErr::InvalidFormatErr),
  }
  Ok(passes)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn names(passes: &[AnnotationPass]) -> Vec<&'static str> {
    passes.iter().map(|p| p.name()).collect()
  }

  #[test]
  fn test_default_passes() {
    let passes = get_annotation_passes(&Config::empty().unwrap()).unwrap();
    assert_eq!(PASS_CLASSES.to_vec(), names(&passes));
    let passes = get_annotation_passes(&Config::from_value(json!({}), None)).unwrap();
    assert_eq!(7, passes.len());
    assert!(passes[5].may_overwrite());
    assert!(passes[0].rewrites_source_tags());
    assert!(!passes[6].may_overwrite());
  }

  #[test]
  fn test_subset_keeps_order() {
    let config = Config::from_value(
      json!({"annotationPass": [{"class": "PassiveClassifier"}, {"class": "StaticFallbackMatcher"}]}),
      None,
    );
    let passes = get_annotation_passes(&config).unwrap();
    assert_eq!(vec!["PassiveClassifier", "StaticFallbackMatcher"], names(&passes));
  }

  #[test]
  fn test_out_of_order() {
    let config = Config::from_value(
      json!({"annotationPass": [{"class": "ModalClassifier"}, {"class": "TagNormalizer"}]}),
      None,
    );
    let err = get_annotation_passes(&config).err().unwrap();
    assert_eq!("TagNormalizer must not run after ModalClassifier", format!("{}", err));
  }

  #[test]
  fn test_invalid_class() {
    let config = Config::from_value(json!({"annotationPass": [{"class": "Lemmatizer"}]}), None);
    let err = get_annotation_passes(&config).err().unwrap();
    assert_eq!("Lemmatizer is invalid AnnotationPass class", format!("{}", err));
    let config = Config::from_value(json!({"annotationPass": [{"name": "TagNormalizer"}]}), None);
    assert!(get_annotation_passes(&config).is_err());
  }

  #[test]
  fn test_invalid_range_is_reported() {
    let config = Config::from_value(
      json!({"passiveRange": -1, "annotationPass": [{"class": "PassiveClassifier"}]}),
      None,
    );
    assert!(get_annotation_passes(&config).is_err());
  }
}
