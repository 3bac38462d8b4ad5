pub mod aggregate;

pub use aggregate::Supertag;
