pub mod permit;
pub mod range;
pub mod text;
