//! Similarity application layer (UseCase entry points)

mod batch;
mod codesim_usecase;

pub use batch::{compare_batch, read_source, BatchOutput, BatchStats};
pub use codesim_usecase::{CodeSimUseCase, CodeSimUseCaseImpl};
