pub mod counsel;
pub mod dashboard;
pub mod generator;
pub mod oracle;
pub mod simulation;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
pub(crate) mod test_support;
