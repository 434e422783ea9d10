pub mod pack_cmds;

#[cfg(test)]
#[path = "tests/pack_cmds_tests.rs"]
mod pack_cmds_tests;
