pub(crate) mod coordinator;
pub(crate) mod range;
pub(crate) mod tween;
