mod float64_column;

pub use float64_column::Float64Column;
