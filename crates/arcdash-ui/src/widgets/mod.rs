pub mod dashed_arc;
