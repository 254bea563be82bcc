//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, JWT
//! y la codificación polyline de las geometrías de ruta.

pub mod errors;
pub mod jwt;
pub mod polyline;
