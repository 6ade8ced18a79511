//! User interface logic - console menu text and button/LED mapping.
//!
//! Everything here is pure so it can be tested on the host; the embedded
//! binary feeds it button timings and writes its text to the UART.
//!
//! ## Components
//!
//! - **Menu**: option parsing, banner and high score rendering
//! - **Input logic**: guess → LED bits, SUBMIT hold → submit / cancel,
//!   console line editing

pub mod input_logic;
pub mod menu;

pub use menu::MenuChoice;
