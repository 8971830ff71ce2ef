//! Wire models specific to the quote server.
//!
//! - `upstream` — the pricing API's response envelope around a `Quote`.

pub mod upstream;
