mod array;
mod compound;
mod list;
mod number;
#[cfg(feature = "serde")]
mod ser;
mod string;
mod value;

pub use array::*;
pub use compound::*;
pub use list::*;
pub use number::*;
pub use string::*;
pub use value::*;
