pub(crate) mod dataset;
pub(crate) mod seed;
pub(crate) mod validator;
