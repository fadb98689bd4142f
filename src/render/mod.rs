/// Output artifacts: the spectrum plot and the age report.
pub mod plot;
pub mod report;
pub mod text;
