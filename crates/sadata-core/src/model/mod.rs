//! Entity collections served by the API.

pub mod hospital;
pub mod school;

pub use hospital::Hospital;
pub use school::School;
