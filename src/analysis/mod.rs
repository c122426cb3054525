pub mod dynamics;
pub mod select;
pub mod similarity;
