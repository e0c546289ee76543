use std::fs::{create_dir_all, read_dir};
use std::io::Error as IOError;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};
use thiserror::Error;

use super::sentence::Sentence;
use super::tagger::CanTag;
use super::text::{Text, TextErr, TextOptions};
use super::writer::{Writer, WriterErr, WriterOptions};

pub const DEFAULT_EXTENSION: &str = "tec";

#[derive(Error, Debug)]
pub enum CorpusErr {
  #[error("{0} is not a directory")]
  NotADirectoryErr(String),
  #[error("{0}")]
  IOError(#[from] IOError),
  #[error("{0}")]
  TextErr(#[from] TextErr),
  #[error("{0}")]
  WriterErr(#[from] WriterErr),
}

#[derive(Debug, Default)]
pub struct ConvertSummary {
  pub converted: Vec<PathBuf>,
  pub failed: Vec<PathBuf>,
}

/// Every file under a folder, searched recursively.
pub struct Corpus {
  folder: PathBuf,
  files: Vec<PathBuf>,
  dirs: Vec<PathBuf>,
  text_options: TextOptions,
  writer_options: WriterOptions,
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>, dirs: &mut Vec<PathBuf>) -> Result<(), IOError> {
  dirs.push(dir.to_path_buf());
  let mut entries = read_dir(dir)?
    .map(|e| e.map(|e| e.path()))
    .collect::<Result<Vec<_>, _>>()?;
  entries.sort();
  for path in entries {
    if path.is_dir() {
      walk(&path, files, dirs)?;
    } else {
      files.push(path);
    }
  }
  Ok(())
}

impl Corpus {
  pub fn new<P: AsRef<Path>>(folder: P) -> Result<Corpus, CorpusErr> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
      return Err(CorpusErr::NotADirectoryErr(folder.display().to_string()));
    }
    let mut files = vec![];
    let mut dirs = vec![];
    walk(folder, &mut files, &mut dirs)?;
    Ok(Corpus {
      folder: folder.to_path_buf(),
      files,
      dirs,
      text_options: TextOptions::default(),
      writer_options: WriterOptions::default(),
    })
  }
  pub fn with_options(mut self, text_options: TextOptions, writer_options: WriterOptions) -> Corpus {
    self.text_options = text_options;
    self.writer_options = writer_options;
    self
  }
  pub fn files(&self) -> &[PathBuf] {
    &self.files
  }
  fn relative<'a>(&self, path: &'a Path) -> &'a Path {
    path.strip_prefix(&self.folder).unwrap_or(path)
  }
  fn copy_dir_tree(&self, new_folder: &Path) -> Result<(), IOError> {
    for dir in self.dirs.iter() {
      let target = new_folder.join(self.relative(dir));
      if !target.exists() {
        create_dir_all(target)?;
      }
    }
    Ok(())
  }
  fn convert_file<T: CanTag>(
    &self,
    tagger: &T,
    writer: &Writer,
    file: &Path,
    target: &Path,
  ) -> Result<(), CorpusErr> {
    let text = Text::open(file, self.text_options.clone())?;
    let sentences = text.parse(tagger)?;
    writer.write_file(&sentences, target)?;
    Ok(())
  }
  /// Tags every file (at most `stop_at` of them) into a mirrored tree under
  /// `new_folder`, giving each output file the extension `ext`. Files that
  /// fail are logged and skipped.
  pub fn convert<T: CanTag, P: AsRef<Path>>(
    &self,
    tagger: &T,
    new_folder: P,
    ext: &str,
    stop_at: Option<usize>,
  ) -> Result<ConvertSummary, CorpusErr> {
    let started = Instant::now();
    let new_folder = new_folder.as_ref();
    self.copy_dir_tree(new_folder)?;
    let writer = Writer::new(self.writer_options.clone());
    let mut summary = ConvertSummary::default();
    let limit = stop_at.unwrap_or_else(|| self.files.len());
    for file in self.files.iter().take(limit) {
      let target = new_folder.join(self.relative(file)).with_extension(ext);
      match self.convert_file(tagger, &writer, file, &target) {
        Ok(()) => {
          info!("{}", target.display());
          summary.converted.push(target);
        }
        Err(e) => {
          warn!("skipped {}: {}", file.display(), e);
          summary.failed.push(file.clone());
        }
      }
    }
    info!(
      "converted {} texts in {:.3} seconds ({} skipped)",
      summary.converted.len(),
      started.elapsed().as_secs_f64(),
      summary.failed.len()
    );
    Ok(summary)
  }
  /// Sentences containing `word`, `tag`, or the pair when both are given.
  /// `lowercase` makes the word comparison case-insensitive.
  pub fn find(
    &self,
    word: Option<&str>,
    tag: Option<&str>,
    lowercase: bool,
    max_matches: Option<usize>,
  ) -> Result<Vec<Sentence>, CorpusErr> {
    let word = word.map(|w| if lowercase { w.to_lowercase() } else { w.to_string() });
    let word_matches = |w: &str, target: &str| {
      if lowercase {
        w.to_lowercase() == target
      } else {
        w == target
      }
    };
    let mut matches = vec![];
    if word.is_none() && tag.is_none() {
      return Ok(matches);
    }
    for file in self.files.iter() {
      let text = Text::open(file, self.text_options.clone())?;
      for sentence in text.sents() {
        let found = sentence.iter().any(|t| {
          word.as_ref().map(|w| word_matches(t.word(), w)).unwrap_or(true)
            && tag.map(|tag| t.source_tag() == tag).unwrap_or(true)
        });
        if found {
          matches.push(sentence.clone());
          if max_matches.map(|m| matches.len() >= m).unwrap_or(false) {
            return Ok(matches);
          }
        }
      }
    }
    Ok(matches)
  }
}
