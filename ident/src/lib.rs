//! Record identifiers.
//!
//! An id is a slug of the headword. Homonyms (records sharing one headword)
//! get `-2`, `-3`, ... after the bare slug, always one past the highest
//! suffix in use.

mod assigner;
mod error;
mod slug;

pub use assigner::{assign, IdAssigner};
pub use error::{IdError, IdResult};
pub use slug::{homonym_suffix, slug, suffixed};
