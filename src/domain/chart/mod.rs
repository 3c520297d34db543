//! Chart aggregate: scales, scene building and tooltip layout.

pub mod entities;
pub mod scale;
pub mod services;
pub mod tooltip;
pub mod value_objects;

pub use entities::*;
pub use scale::*;
pub use services::*;
pub use tooltip::*;
pub use value_objects::*;
