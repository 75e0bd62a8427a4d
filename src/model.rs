pub(crate) mod motion;
pub(crate) mod pictograph;
pub(crate) mod types;
