mod collection;
mod feature;
mod properties;
mod value;

pub use collection::*;
pub use feature::*;
pub use properties::*;
pub use value::*;
