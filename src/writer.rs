use std::fs::File;
use std::io::{BufWriter, Error as IOError, Write};
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::warn;
use thiserror::Error;

use super::sentence::{Sentence, Token};

pub const COLUMN_MARKER: &str = "^";

#[derive(Error, Debug)]
pub enum WriterErr {
  #[error("{0}")]
  IOError(#[from] IOError),
}

#[derive(Clone, Debug)]
pub struct WriterOptions {
  pub header: Option<String>,
  pub encoding: &'static Encoding,
  pub keep_source_tag: bool,
}

impl Default for WriterOptions {
  fn default() -> Self {
    WriterOptions {
      header: None,
      encoding: UTF_8,
      keep_source_tag: true,
    }
  }
}

/// Renders annotated sentences one token per line:
/// `word ^slot0+...+slot5 ^SOURCE_TAG`.
pub struct Writer {
  options: WriterOptions,
}

impl Writer {
  pub fn new(options: WriterOptions) -> Writer {
    Writer { options }
  }
  pub fn format_token(&self, token: &Token) -> String {
    if self.options.keep_source_tag {
      format!(
        "{} {}{} {}{}",
        token.word(),
        COLUMN_MARKER,
        token.target_tag,
        COLUMN_MARKER,
        token.source_tag()
      )
    } else {
      format!("{} {}{}", token.word(), COLUMN_MARKER, token.target_tag)
    }
  }
  pub fn render(&self, sentences: &[Sentence]) -> String {
    let body = sentences
      .iter()
      .flat_map(|s| s.iter())
      .map(|t| self.format_token(t))
      .collect::<Vec<_>>()
      .join("\n");
    match &self.options.header {
      Some(header) if !header.is_empty() => format!("{}\n{}", header, body),
      _ => body,
    }
  }
  pub fn write<W: Write>(&self, sentences: &[Sentence], out: &mut W) -> Result<(), WriterErr> {
    let rendered = self.render(sentences);
    let (bytes, _, had_errors) = self.options.encoding.encode(&rendered);
    if had_errors {
      warn!(
        "characters not representable in {} were written as numeric references",
        self.options.encoding.name()
      );
    }
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
  }
  pub fn write_file<P: AsRef<Path>>(&self, sentences: &[Sentence], path: P) -> Result<(), WriterErr> {
    let mut out = BufWriter::new(File::create(path)?);
    self.write(sentences, &mut out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tag_vector::Slot;
  use encoding_rs::WINDOWS_1252;

  fn build_sentences() -> Vec<Sentence> {
    let mut first = Sentence::from_tagged("was_VBDZ structured_VVN", "_");
    first[1].target_tag.set(Slot::Category, "VL");
    first[1].target_tag.set(Slot::Voice, "AGLS");
    first[1].target_tag.set(Slot::Form, "XVBN");
    let second = Sentence::from_tagged("café_NN1", "_");
    vec![first, second]
  }

  #[test]
  fn test_render() {
    let writer = Writer::new(WriterOptions::default());
    assert_eq!(
      "was ^+++++ ^VBDZ\nstructured ^VL++AGLS+++XVBN ^VVN\ncafé ^+++++ ^NN1",
      writer.render(&build_sentences())
    );
  }

  #[test]
  fn test_render_without_source_tag() {
    let writer = Writer::new(WriterOptions {
      header: Some(String::from("<header>")),
      keep_source_tag: false,
      ..Default::default()
    });
    let rendered = writer.render(&build_sentences());
    assert!(rendered.starts_with("<header>\nwas ^+++++\n"));
    assert!(rendered.ends_with("café ^+++++"));
  }

  #[test]
  fn test_write_encoding() {
    let writer = Writer::new(WriterOptions {
      encoding: WINDOWS_1252,
      keep_source_tag: false,
      ..Default::default()
    });
    let mut out = vec![];
    writer.write(&build_sentences()[1..], &mut out).unwrap();
    assert_eq!(b"caf\xe9 ^+++++".to_vec(), out);
  }
}
