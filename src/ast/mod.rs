pub(crate) mod node;
pub(crate) mod printer;
pub(crate) mod store;
