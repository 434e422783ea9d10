pub mod errors;
pub mod report;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod errors_tests;

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod report_tests;
