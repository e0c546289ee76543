use std::sync::Arc;

use log::info;
use thiserror::Error;

use super::config::{Config, ConfigErr};
use super::lexicon_lib::lexical_resources::{LexicalResources, LexicalResourcesErr};
use super::pass::annotation_pass::{
  get_annotation_passes, AnnotationPass, AnnotationPassGetErr,
};
use super::tagger::Tagger;

#[derive(Error, Debug)]
pub enum ConverterErr {
  #[error("{0}")]
  ConfigErr(#[from] ConfigErr),
  #[error("{0}")]
  LexicalResourcesErr(#[from] LexicalResourcesErr),
  #[error("{0}")]
  AnnotationPassGetErr(#[from] AnnotationPassGetErr),
}

type AnnotationPasses = Arc<Vec<AnnotationPass>>;

/// Loads the settings and lexical resources once and hands out taggers that
/// share them.
pub struct Converter {
  resources: Arc<LexicalResources>,
  passes: AnnotationPasses,
}

impl Converter {
  pub fn new(resources: &Arc<LexicalResources>, passes: &AnnotationPasses) -> Converter {
    Converter {
      resources: Arc::clone(resources),
      passes: Arc::clone(passes),
    }
  }
  pub fn setup(
    config_path: Option<&str>,
    resource_dir: Option<&str>,
  ) -> Result<Converter, ConverterErr> {
    let config = Config::setup(config_path, resource_dir)?;
    Converter::from_config(&config)
  }
  pub fn from_config(config: &Config) -> Result<Converter, ConverterErr> {
    let resources = LexicalResources::setup(config)?;
    let passes = get_annotation_passes(config)?;
    info!(
      "{} annotation passes: {}",
      passes.len(),
      passes.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
    );
    Ok(Converter::new(&Arc::new(resources), &Arc::new(passes)))
  }
  pub fn create(&self) -> Tagger {
    Tagger::new(&self.resources, &self.passes)
  }
}
