pub mod analysis_service;
pub mod classifier_service;
pub mod comparison_service;
pub mod formulas;
