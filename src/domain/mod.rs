pub mod coerce;
pub mod entities;
pub mod seed;
