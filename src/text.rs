use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Error as IOError, Read};
use std::path::{Path, PathBuf};

use encoding_rs::{DecoderResult, Encoding, UTF_8};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use thiserror::Error;

use super::sentence::{Sentence, Token, EMPTY_SOURCE_TAG};
use super::tagger::{CanTag, TaggerErr};

lazy_static! {
  static ref DEFAULT_SENTENCE_DELIMITER: Regex = Regex::new(r"\n?</?s>\n?").unwrap();
}

pub const DEFAULT_WORD_TAG_DELIMITER: &str = "_";

#[derive(Error, Debug)]
pub enum TextErr {
  #[error("{0}")]
  IOError(#[from] IOError),
  #[error("{path}: {source}")]
  TaggerErr { path: String, source: TaggerErr },
}

#[derive(Clone, Debug)]
pub struct TextOptions {
  pub encoding: &'static Encoding,
  pub lowercase: bool,
  /// Number of leading sentence chunks to skip.
  pub header_end: usize,
  pub sentence_delimiter: Regex,
  pub word_tag_delimiter: String,
}

impl Default for TextOptions {
  fn default() -> Self {
    TextOptions {
      encoding: UTF_8,
      lowercase: false,
      header_end: 0,
      sentence_delimiter: DEFAULT_SENTENCE_DELIMITER.clone(),
      word_tag_delimiter: DEFAULT_WORD_TAG_DELIMITER.to_string(),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreqKey {
  Word,
  Tag,
  WordTag,
}

#[derive(Debug)]
pub struct Text {
  path: Option<PathBuf>,
  options: TextOptions,
  sents: Vec<Sentence>,
}

fn split_item(item: &str, delimiter: &str) -> Token {
  match item.rfind(delimiter) {
    Some(pos) if !delimiter.is_empty() => {
      let tag = &item[pos + delimiter.len()..];
      let tag = if tag.is_empty() { EMPTY_SOURCE_TAG } else { tag };
      Token::new(&item[..pos], tag)
    }
    _ => Token::new(item, EMPTY_SOURCE_TAG),
  }
}

fn split_sentences(text: &str, options: &TextOptions) -> Vec<Sentence> {
  options
    .sentence_delimiter
    .split(text)
    .skip(options.header_end)
    .map(str::trim)
    .filter(|chunk| !chunk.is_empty())
    .map(|chunk| {
      Sentence::new(
        chunk
          .split_whitespace()
          .map(|item| split_item(item, &options.word_tag_delimiter))
          .collect(),
      )
    })
    .collect()
}

fn decode_skipping_malformed(encoding: &'static Encoding, bytes: &[u8]) -> (String, bool) {
  let mut decoder = encoding.new_decoder();
  let mut decoded = String::with_capacity(
    decoder
      .max_utf8_buffer_length_without_replacement(bytes.len())
      .unwrap_or(bytes.len()),
  );
  let mut src = bytes;
  let mut had_errors = false;
  loop {
    let (result, read) = decoder.decode_to_string_without_replacement(src, &mut decoded, true);
    src = &src[read..];
    match result {
      DecoderResult::InputEmpty => break,
      DecoderResult::Malformed(_, _) => had_errors = true,
      DecoderResult::OutputFull => {
        let needed = decoder
          .max_utf8_buffer_length_without_replacement(src.len())
          .unwrap_or(src.len());
        decoded.reserve(needed.max(16));
      }
    }
  }
  (decoded, had_errors)
}

impl Text {
  pub fn from_str(text: &str, options: TextOptions) -> Text {
    let sents = if options.lowercase {
      split_sentences(&text.to_lowercase(), &options)
    } else {
      split_sentences(text, &options)
    };
    Text {
      path: None,
      options,
      sents,
    }
  }
  /// Reads and decodes the file at `path`. Undecodable bytes are dropped.
  pub fn open<P: AsRef<Path>>(path: P, options: TextOptions) -> Result<Text, TextErr> {
    let path = path.as_ref();
    let mut bytes = vec![];
    BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
    let (mut text, had_errors) = decode_skipping_malformed(options.encoding, &bytes);
    if had_errors {
      warn!("{}: dropped bytes not valid in {}", path.display(), options.encoding.name());
    }
    if options.lowercase {
      text = text.to_lowercase();
    }
    let sents = split_sentences(&text, &options);
    Ok(Text {
      path: Some(path.to_path_buf()),
      options,
      sents,
    })
  }
  pub fn path(&self) -> Option<&Path> {
    self.path.as_deref()
  }
  pub fn sents(&self) -> &[Sentence] {
    &self.sents
  }
  pub fn tokens(&self) -> impl Iterator<Item = &Token> {
    self.sents.iter().flat_map(|s| s.iter())
  }
  pub fn freq_dist(
    &self,
    key: FreqKey,
    formatter: Option<&dyn Fn(&str) -> String>,
  ) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    for token in self.tokens() {
      let element = match key {
        FreqKey::Word => token.word().to_string(),
        FreqKey::Tag => token.source_tag().to_string(),
        FreqKey::WordTag => format!(
          "{}{}{}",
          token.word(),
          self.options.word_tag_delimiter,
          token.source_tag()
        ),
      };
      let element = match formatter {
        Some(f) => f(&element),
        None => element,
      };
      *dist.entry(element).or_insert(0) += 1;
    }
    dist
  }
  /// Annotates every sentence; the first failing sentence aborts the text.
  pub fn parse<T: CanTag>(&self, tagger: &T) -> Result<Vec<Sentence>, TextErr> {
    self
      .sents
      .iter()
      .map(|sentence| {
        tagger.parse(sentence.clone()).map_err(|source| TextErr::TaggerErr {
          path: self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
          source,
        })
      })
      .collect()
  }
}
