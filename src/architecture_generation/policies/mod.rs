mod driver_mapping;

pub use driver_mapping::{DriverBinding, DriverMapping, HalPort};
