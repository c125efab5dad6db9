//! Synthetic quotes for symbols the quote source could not serve.
//!
//! The [`FallbackTable`] holds one plausible `(current, change_percent)`
//! pair per known index. [`JitterPolicy`] perturbs the change so repeated
//! fallbacks do not look frozen. Fallback values are never presented as
//! accurate; every record built here is tagged `FALLBACK`.

mod jitter;
mod table;

pub use jitter::JitterPolicy;
pub use table::{FallbackEntry, FallbackTable};
