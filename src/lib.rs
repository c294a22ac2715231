//! # basecalc
//!
//! A small calculator language run one line at a time. Scripts assign
//! integer arithmetic to variables and print results in decimal,
//! hexadecimal or binary.
//!
//! ```text
//! config hex
//! x = 255
//! print x
//! ```
//!
//! Run a script with `basecalc script.txt`, or start `basecalc` with no
//! arguments to type one in.
//!
//! The library can be embedded directly.
//! ```
//! use basecalc::mach::Runtime;
//!
//! let mut runtime = Runtime::new();
//! runtime.run("config bin\nx = 5\nprint x * 2").unwrap();
//! assert_eq!(runtime.output_rows(), vec!["1010"]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
