pub(crate) mod builder;
pub(crate) mod ease;
pub(crate) mod timeline;
