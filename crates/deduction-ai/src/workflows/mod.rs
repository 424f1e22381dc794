pub mod fieldnotes;
pub mod profiling;
