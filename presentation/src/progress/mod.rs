//! Progress display while an answer is resolved

pub mod reporter;
