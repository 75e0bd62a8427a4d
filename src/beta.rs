pub(crate) mod category;
pub(crate) mod collaborators;
pub(crate) mod direction;
pub(crate) mod resolver;
