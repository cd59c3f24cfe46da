//! Wavefolio library - Portfolio particle backdrop and chat proxy

pub mod camera;
pub mod chat;
pub mod cli;
pub mod clock;
pub mod error;
pub mod field;
pub mod input;
pub mod params;
pub mod rendering;
