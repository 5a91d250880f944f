pub mod document;
pub mod folder_selector;
pub mod image_transform;
pub mod labeler;
pub mod orientation;
pub mod reject_writer;

pub use document::{Block, CellSummary, ReportDocument};
pub use folder_selector::{FolderSelector, Selection};
pub use image_transform::{ImageTransformer, LabeledImage, TransformStats};
pub use labeler::{FontLabeler, Labeler};
pub use reject_writer::RejectWriter;
