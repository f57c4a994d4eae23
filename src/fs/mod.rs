pub mod expand;
pub mod scanner;
pub mod size;
pub mod sort;
pub mod tree;
