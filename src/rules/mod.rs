//! Rule-seeded puzzle rules

pub mod data_type;
pub mod random;
pub mod solutions;

pub use data_type::{DataType, DATA_TYPE_COUNT};
pub use random::{MonoRandom, RandomSource};
pub use solutions::{
    SolutionGenerator, SolutionTable, SolutionVector, SOLUTION_LENGTH, UNSEEDED_SENTINEL,
};
