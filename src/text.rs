mod builder;
mod component;
mod content;
mod examine;
mod format;
mod style;

pub use builder::*;
pub use component::*;
pub use content::*;
pub use examine::*;
pub use format::*;
pub use style::*;
