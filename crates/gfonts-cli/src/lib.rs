//! Library components for the `gfonts` command.

pub mod logging;
pub mod pipeline;

pub use pipeline::{
    AnnotationRequest, AnnotationResult, DEFAULT_DATA_PATH, DEFAULT_SAVE_PATH,
    create_font_annotations,
};
