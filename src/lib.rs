//! # AP CSP Pseudocode
//!
//! An interpreter for the pseudocode of the AP Computer Science Principles
//! reference sheet.
//!
//! Run a program file with `apcsp program.txt`. Output is shown one line
//! per `DISPLAY`, and `INPUT` prompts in the terminal.
//! ```text
//! $ apcsp greet.txt
//! Your name? Ada
//! Hello Ada
//! ```
//!
//! The library runs programs for any host that implements the
//! [`Output`](mach::Output), [`InputProvider`](mach::InputProvider) and
//! [`StatusObserver`](mach::StatusObserver) traits.
//! ```text
//! let mut interpreter = Interpreter::new(Config::default());
//! let outcome = interpreter.run(source, &mut host);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
