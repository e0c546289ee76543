pub mod annotation_pass;
pub mod extraposition;
pub mod modal;
pub mod passive;
pub mod phrasal_verb;
pub mod proper_noun;
pub mod static_fallback;
pub mod tag_normalizer;
