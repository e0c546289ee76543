//! ```
//! use bibertag::prelude::*;
//!
//! let converter = Converter::setup(None, None).unwrap();
//! let tagger = converter.create();
//!
//! let sentence = Sentence::from_tagged("It_PPH1 was_VBDZ reported_VVN by_II the_AT press_NN1", "_");
//! let sentence = tagger.parse(sentence).unwrap();
//!
//! for token in sentence.iter() {
//!     println!("{} ^{} ^{}", token.word(), token.target_tag, token.source_tag());
//! }
//! // => It ^+++++ ^PPH1
//! // => was ^VBD+BEDZ+AUX+++ ^VBDZ
//! // => reported ^VL++BY+++XVBN ^VVN
//! // => by ^+++++ ^II
//! // => the ^DET+AT+DEF+SING++ ^AT
//! // => press ^+++++ ^NN1
//!
//! // Whole texts, one `word_TAG` item per token and `<s>`-delimited sentences
//!
//! let text = Text::from_str("<s>\nshe_PPHS1 is_VBZ going_VVGK to_TO leave_VVI\n</s>", TextOptions::default());
//! let parsed = text.parse(&tagger).unwrap();
//! let writer = Writer::new(WriterOptions::default());
//! println!("{}", writer.render(&parsed));
//! // => she ^+++++ ^PPHS1
//! // => is ^VM+PRD+++MULTI+ ^VBZ
//! // => going ^VM+PRD+++MULTI+ ^VVGK
//! // => to ^VM+PRD+++MULTI+ ^TO
//! // => leave ^+++++ ^VVI
//! ```

#![crate_name = "bibertag"]
#![crate_type = "lib"]
#![crate_type = "dylib"]
#![crate_type = "rlib"]

pub mod config;
pub mod converter;
pub mod corpus;
pub mod lexicon_lib;
pub mod pass;
pub mod resources;
pub mod sentence;
pub mod tag_vector;
pub mod tagger;
pub mod text;
pub mod writer;

pub mod prelude {
  pub use crate::converter::Converter;
  pub use crate::sentence::{Sentence, Token};
  pub use crate::tag_vector::{Slot, TagVector};
  pub use crate::tagger::{CanTag, Tagger};
  pub use crate::text::{Text, TextOptions};
  pub use crate::writer::{Writer, WriterOptions};
}
