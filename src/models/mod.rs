pub mod alert;
pub mod finance;
pub mod garage;
pub mod hotspot;
pub mod output;
pub mod settings;
pub mod shift;
