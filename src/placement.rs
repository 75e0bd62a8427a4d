pub(crate) mod adjustment;
pub(crate) mod calculator;
pub(crate) mod orientation;
pub(crate) mod points;
