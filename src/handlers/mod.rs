pub mod cv;
pub mod department;
pub mod diagnostic;
pub mod employee;
