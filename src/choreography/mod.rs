pub(crate) mod content;
pub(crate) mod landing;
pub(crate) mod section;
