pub mod category;
pub mod photo_folder;

pub use category::FolderClass;
pub use photo_folder::{
    map_image_slots, PhotoFolder, RejectReason, RejectedFolder, IMAGES_PER_FOLDER,
};
