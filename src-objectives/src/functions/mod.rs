//! Objective function implementations
//!
//! - `product`: generic bivariate saddle `x * y`
//! - `potential_field`: obstacle repulsion plus goal attraction for path planning

pub mod potential_field;
pub mod product;

pub use potential_field::*;
pub use product::*;
