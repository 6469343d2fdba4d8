pub mod convert;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod validate;
pub mod vocab;
