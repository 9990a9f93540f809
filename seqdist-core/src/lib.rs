#[macro_use]
mod par;

pub mod align;
pub mod alphabets;
pub mod dist;
pub mod error;
pub mod io;
pub mod pair;
pub mod seq;
