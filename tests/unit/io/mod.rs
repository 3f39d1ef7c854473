pub mod cli;
pub mod parse;
pub mod scatter;
