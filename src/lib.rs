pub mod column;
pub mod dataframe;
pub mod error;
pub mod io;
pub mod ml;

// Re-export commonly used types
pub use column::Float64Column;
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use ml::metrics::{
    accuracy_score, mean_absolute_error, mse, print_prediction_scores, print_scores, rmse, rsq,
    ReportConfig, ScoreReport,
};
pub use ml::models::Predictor;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
