//! Value objects - immutable, identity-less building blocks of the aggregates

mod elms;
mod house_name;
mod pet;
mod sex;
mod traits;

pub use elms::{ElmRecord, Grade, Subject};
pub use house_name::HouseName;
pub use pet::Pet;
pub use sex::Sex;
pub use traits::{TraitMap, TraitQuery, HIGHLY_INTELLIGENT};
