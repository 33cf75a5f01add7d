
mod repl_tests;
