pub mod cases;
pub mod correlate;
pub mod dispatch;
pub mod generate;
pub mod shared;
pub mod signatures;
