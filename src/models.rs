pub mod spec;
pub mod value;

pub use spec::{ParameterSpec, TargetKind};
pub use value::{Bindings, BoundValue};
