pub mod campus;
pub mod chart;
pub mod counter;
pub mod process;
pub mod roi;
