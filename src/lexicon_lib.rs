pub mod auxiliary;
pub mod lexical_resources;
pub mod replacement_table;
pub mod tag_table;
pub mod word_set_lexicon;
