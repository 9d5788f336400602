/// Console adapters for stderr progress and terminal styling
mod progress_reporter;
mod summary_styler;

pub use progress_reporter::StderrProgressReporter;
pub use summary_styler::SummaryStyler;
