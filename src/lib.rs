//! Generated universe of space biology research papers: corpus generation,
//! filtering, mock citation synthesis, clustering and a templated chat
//! endpoint.

pub mod chat;
pub mod universe;
pub mod util;
