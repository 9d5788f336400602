/// Crate-wide result type. Domain errors are `ConverterError` values wrapped in
/// `anyhow::Error` so callers can attach context with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
