//! Rendering of token sequences into the tokens markup format.
//!
//! Each token becomes one `<tag> value </tag>` line inside a `<tokens>`
//! element. Only symbol payloads are escaped.

pub mod serializer;
