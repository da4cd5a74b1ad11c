pub mod chart;
pub mod isolate;
pub mod natural;
pub mod sweep;
