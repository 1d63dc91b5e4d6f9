pub(crate) mod binding;
pub(crate) mod controller;
pub(crate) mod layout;
pub(crate) mod scrub;
pub(crate) mod sink;
