// Content core: pipeline orchestration, quality scoring, recommendations and
// batch fan-out. Backends are reached only through the traits in crate::backends.

pub mod batch;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod quality;
pub mod recommendations;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_support;
