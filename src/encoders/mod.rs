pub mod encoding;
pub mod segmenter;
