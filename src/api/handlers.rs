#[path = "handlers/evaluate.rs"]
mod evaluate;

#[path = "handlers/compare.rs"]
mod compare;

#[path = "handlers/helpers.rs"]
mod helpers;

pub use compare::handle_ab_test;
pub use evaluate::{handle_evaluate, handle_root};

#[cfg(test)]
#[path = "handlers/tests.rs"]
mod tests;
