pub(crate) mod default;
pub(crate) mod generate;
pub(crate) mod model;
