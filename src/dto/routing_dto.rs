//! DTOs del adaptador de rutas
//!
//! Este módulo contiene los tipos de la petición y la respuesta del
//! motor GraphHopper, y el resultado decodificado que consume la UI.

use serde::{Deserialize, Serialize};

/// Límite efectivo cuando el caller no declara una dimensión
pub const DEFAULT_LIMIT: f64 = 1.0;

/// Un punto geográfico por el que debe pasar la ruta, en el orden
/// dado por el caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Restricciones del vehículo para parametrizar la petición de ruta.
/// No se persisten como parte de la ruta.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleConstraints {
    pub height_limit: Option<f64>,
    pub weight_limit: Option<f64>,
    pub width_limit: Option<f64>,
}

impl VehicleConstraints {
    /// Valor efectivo de un límite: 1 cuando falta o no es positivo
    fn effective(limit: Option<f64>) -> f64 {
        match limit {
            Some(value) if value > 0.0 => value,
            _ => DEFAULT_LIMIT,
        }
    }

    pub fn height(&self) -> f64 {
        Self::effective(self.height_limit)
    }

    pub fn weight(&self) -> f64 {
        Self::effective(self.weight_limit)
    }

    pub fn width(&self) -> f64 {
        Self::effective(self.width_limit)
    }
}

/// Request de POST /routing/route
#[derive(Debug, Deserialize)]
pub struct ComputeRouteRequest {
    pub points: Vec<Waypoint>,

    #[serde(flatten)]
    pub constraints: VehicleConstraints,

    pub profile: Option<String>,
}

/// Cuerpo de la petición hacia GraphHopper. Inmutable una vez enviada.
#[derive(Debug, Serialize)]
pub struct RouteRequest {
    pub profile: String,
    /// GraphHopper espera pares [lon, lat]
    pub points: Vec<[f64; 2]>,
    pub custom_model: CustomModel,
}

/// Modelo de costes con reglas de exclusión por dimensión
#[derive(Debug, Serialize)]
pub struct CustomModel {
    pub distance_influence: i32,
    pub priority: Vec<PriorityRule>,
}

/// Regla de prioridad: las aristas que cumplen el predicado quedan
/// con multiplicador "0", es decir, excluidas
#[derive(Debug, Serialize)]
pub struct PriorityRule {
    #[serde(rename = "if")]
    pub condition: String,
    pub multiply_by: String,
}

/// Respuesta cruda de GraphHopper
#[derive(Debug, Deserialize)]
pub struct GraphHopperResponse {
    #[serde(default)]
    pub paths: Vec<GraphHopperPath>,
}

/// Un path de la respuesta de GraphHopper
#[derive(Debug, Deserialize)]
pub struct GraphHopperPath {
    /// Geometría como polyline codificado
    pub points: String,
    /// Distancia total en metros
    pub distance: f64,
    /// Tiempo total en milisegundos
    pub time: i64,
    #[serde(default)]
    pub instructions: Vec<TurnInstruction>,
    /// Se deja como JSON crudo: una estructura malformada aquí no
    /// debe invalidar el path completo (hay fallback a los waypoints
    /// de entrada)
    #[serde(default)]
    pub snapped_waypoints: Option<serde_json::Value>,
}

/// Instrucción de giro, pasada tal cual hacia la UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnInstruction {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub sign: i32,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub interval: Vec<i64>,
}

/// Par lat/lng en el formato que espera la UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Resumen de la ruta. El tiempo ya está normalizado a segundos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// Metros
    pub total_distance: f64,
    /// Segundos (convertido desde los milisegundos del motor)
    pub total_time: f64,
}

/// Ruta decodificada, propiedad exclusiva del caller tras el retorno
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub name: String,
    pub coordinates: Vec<LatLng>,
    pub summary: RouteSummary,
    pub instructions: Vec<TurnInstruction>,
    /// Waypoints ajustados a la red viaria, o los de entrada si el
    /// motor no los devuelve
    pub actual_waypoints: Vec<LatLng>,
}

/// Marcador de fallo de routing: se entrega a la UI, nunca se lanza
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingFailure {
    pub status: i32,
    pub message: String,
}

/// Resultado del adaptador: ruta o marcador de fallo
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RoutingOutcome {
    Route(RouteResult),
    Failure(RoutingFailure),
}
