// Job board core: the in-memory store, search filtering, and the creation and
// application flows built on top of it.

pub mod apply;
pub mod filter;
pub mod handlers;
pub mod pipeline;
pub mod salary;
pub mod seed;
pub mod store;
pub mod validation;
