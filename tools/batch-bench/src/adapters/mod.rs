//! Backend adapters for the extraction API seam

mod keyrank;

pub use keyrank::KeyrankAdapter;
