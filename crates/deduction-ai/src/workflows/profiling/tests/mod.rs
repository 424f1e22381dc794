mod aggregation;
mod classification;
mod common;
