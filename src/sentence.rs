use std::ops::{Index, IndexMut, Range};

use super::tag_vector::TagVector;

/// Source tag given to items that carry no tag in the input.
pub const EMPTY_SOURCE_TAG: &str = "EMPTY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  word: String,
  source_tag: String,
  pub target_tag: TagVector,
}

impl Token {
  pub fn new<W: Into<String>, T: Into<String>>(word: W, source_tag: T) -> Token {
    Token {
      word: word.into(),
      source_tag: source_tag.into(),
      target_tag: TagVector::default(),
    }
  }
  pub fn word(&self) -> &str {
    &self.word
  }
  pub fn lower(&self) -> String {
    self.word.to_lowercase()
  }
  pub fn source_tag(&self) -> &str {
    &self.source_tag
  }
  pub(crate) fn set_source_tag(&mut self, source_tag: &str) {
    self.source_tag = source_tag.to_string();
  }
  pub fn tag_starts_with(&self, prefix: &str) -> bool {
    self.source_tag.starts_with(prefix)
  }
  /// Two-letter prefix of the source tag (the whole tag if shorter).
  pub fn tag_prefix(&self) -> &str {
    match self.source_tag.char_indices().nth(2) {
      Some((i, _)) => &self.source_tag[..i],
      None => &self.source_tag,
    }
  }
}

/// An ordered sequence of tokens owned by one `parse` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sentence {
  tokens: Vec<Token>,
}

impl Sentence {
  pub fn new(tokens: Vec<Token>) -> Sentence {
    Sentence { tokens }
  }
  pub fn from_pairs<W: AsRef<str>, T: AsRef<str>>(pairs: &[(W, T)]) -> Sentence {
    Sentence::new(
      pairs
        .iter()
        .map(|(word, tag)| Token::new(word.as_ref(), tag.as_ref()))
        .collect(),
    )
  }
  /// Parses `word_TAG word_TAG ...`, mostly useful for fixtures.
  pub fn from_tagged(text: &str, delimiter: &str) -> Sentence {
    Sentence::new(
      text
        .split_whitespace()
        .map(|item| match item.rfind(delimiter) {
          Some(pos) if pos + delimiter.len() < item.len() => {
            Token::new(&item[..pos], &item[pos + delimiter.len()..])
          }
          Some(pos) => Token::new(&item[..pos], EMPTY_SOURCE_TAG),
          None => Token::new(item, EMPTY_SOURCE_TAG),
        })
        .collect(),
    )
  }
  pub fn len(&self) -> usize {
    self.tokens.len()
  }
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }
  pub fn iter(&self) -> std::slice::Iter<Token> {
    self.tokens.iter()
  }
  pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<Token> {
    self.tokens.iter_mut()
  }
  pub fn into_tokens(self) -> Vec<Token> {
    self.tokens
  }
  /// Index range of at most `length` tokens strictly after `start`.
  pub fn tail_range(&self, start: usize, length: usize) -> Range<usize> {
    let begin = (start + 1).min(self.tokens.len());
    let end = start.saturating_add(1).saturating_add(length).min(self.tokens.len());
    begin..end
  }
  pub fn tail(&self, start: usize, length: usize) -> &[Token] {
    &self.tokens[self.tail_range(start, length)]
  }
  pub fn rest(&self, start: usize) -> &[Token] {
    self.tail(start, self.tokens.len())
  }
  pub fn words(&self) -> Vec<&str> {
    self.tokens.iter().map(|t| t.word()).collect()
  }
}

impl Index<usize> for Sentence {
  type Output = Token;
  fn index(&self, index: usize) -> &Token {
    &self.tokens[index]
  }
}

impl IndexMut<usize> for Sentence {
  fn index_mut(&mut self, index: usize) -> &mut Token {
    &mut self.tokens[index]
  }
}

impl<'a> IntoIterator for &'a Sentence {
  type Item = &'a Token;
  type IntoIter = std::slice::Iter<'a, Token>;
  fn into_iter(self) -> Self::IntoIter {
    self.tokens.iter()
  }
}
