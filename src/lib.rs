#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod criterion;
pub mod error;
pub mod functions;
pub mod residuals;
pub mod tags;

pub use catalog::{Problem, ProblemCatalog, ProblemSelection, SolutionX};
pub use criterion::{sum_of_squared_residuals, Arity, Criterion, CriterionFn, ResidualFn};
pub use error::{BenchmarkError, Result};
pub use functions::*;
pub use tags::{family_name, FunctionTags, TagTable};
