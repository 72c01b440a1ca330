// Model exports

pub mod settings;
