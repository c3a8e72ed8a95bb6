pub mod goal;
pub mod progress;
pub mod summary;
pub mod task;
