//! # AP CSP Pseudocode
//!
//! Runs a pseudocode program file in the terminal.
//!

mod term;

fn main() {
    term::main()
}
