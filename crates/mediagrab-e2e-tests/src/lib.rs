pub mod test_utils;

pub use test_utils::{media_csv, write_input_csv};
