//! Adaptador del motor de rutas GraphHopper
//!
//! Este módulo traduce una lista ordenada de waypoints más las
//! restricciones del vehículo en una petición al motor externo, y
//! decodifica la respuesta en una ruta. Una llamada de red por
//! cómputo, sin reintentos y sin caché; el adaptador no retiene
//! estado entre llamadas más allá de la URL y el profile configurados.
//!
//! Un fallo de transporte o una respuesta no-JSON producen un
//! marcador de fallo `{status: -1, message}` que la UI decide cómo
//! presentar; nunca se propaga como error.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::dto::routing_dto::{
    CustomModel, GraphHopperPath, GraphHopperResponse, LatLng, PriorityRule, RouteRequest,
    RouteResult, RouteSummary, RoutingFailure, RoutingOutcome, VehicleConstraints, Waypoint,
};
use crate::utils::polyline;

/// Una llamada colgada al motor no debe bloquear al caller indefinidamente
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct RoutingService {
    service_url: String,
    profile: String,
    client: Client,
}

impl RoutingService {
    pub fn new(service_url: String, profile: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            service_url,
            profile,
            client,
        }
    }

    /// Construir la petición hacia GraphHopper. Cada dimensión del
    /// vehículo se expresa como regla de exclusión: las aristas cuya
    /// capacidad declarada queda por debajo del límite reciben
    /// multiplicador "0" y el motor no debe atravesarlas si existe
    /// alternativa. Tres reglas independientes equivalen a la
    /// conjunción "pasa todas".
    pub fn build_request(
        &self,
        waypoints: &[Waypoint],
        constraints: &VehicleConstraints,
        profile: Option<&str>,
    ) -> RouteRequest {
        // GraphHopper espera pares [lon, lat]
        let points = waypoints
            .iter()
            .map(|wp| [wp.longitude, wp.latitude])
            .collect();

        RouteRequest {
            profile: profile.unwrap_or(&self.profile).to_string(),
            points,
            custom_model: CustomModel {
                distance_influence: 1,
                priority: vec![
                    PriorityRule {
                        condition: format!("max_height < {}", constraints.height()),
                        multiply_by: "0".to_string(),
                    },
                    PriorityRule {
                        condition: format!("max_weight < {}", constraints.weight()),
                        multiply_by: "0".to_string(),
                    },
                    PriorityRule {
                        condition: format!("max_width < {}", constraints.width()),
                        multiply_by: "0".to_string(),
                    },
                ],
            },
        }
    }

    /// Calcular una ruta. El adaptador confía en su entrada: la
    /// validación (≥2 waypoints, números válidos) es del caller.
    pub async fn compute_route(
        &self,
        waypoints: &[Waypoint],
        constraints: &VehicleConstraints,
        profile: Option<&str>,
    ) -> RoutingOutcome {
        let request = self.build_request(waypoints, constraints, profile);
        let url = format!("{}?ch=false", self.service_url);

        info!("🗺️ Calculando ruta con {} waypoints via {}", waypoints.len(), self.service_url);
        debug!("📋 Request body: {:?}", request);

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("❌ Fallo de transporte hacia GraphHopper: {}", e);
                return routing_failure(format!("Routing error: {}", e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("❌ Error leyendo respuesta de GraphHopper: {}", e);
                return routing_failure(format!("Routing error: {}", e));
            }
        };

        if !status.is_success() {
            warn!("❌ GraphHopper respondió {}: {}", status, body);
            return routing_failure(format!("GraphHopper error {}", status));
        }

        let parsed: GraphHopperResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("❌ Respuesta de GraphHopper no es JSON válido: {}", e);
                return routing_failure(format!("Routing error: {}", e));
            }
        };

        decode_response(parsed, waypoints)
    }
}

/// Decodificar la respuesta del motor en una ruta
pub fn decode_response(response: GraphHopperResponse, waypoints: &[Waypoint]) -> RoutingOutcome {
    let Some(path) = response.paths.into_iter().next() else {
        return routing_failure("GraphHopper no devolvió ningún path".to_string());
    };

    decode_path(path, waypoints)
}

/// Decodificar un path: geometría, totales e instrucciones.
/// El tiempo del motor viene en milisegundos y se normaliza a
/// segundos aquí, en la frontera, y en ningún otro sitio.
pub fn decode_path(path: GraphHopperPath, waypoints: &[Waypoint]) -> RoutingOutcome {
    let coords = match polyline::decode(&path.points) {
        Ok(coords) => coords,
        Err(e) => return routing_failure(format!("Routing error: {}", e)),
    };

    let coordinates = coords
        .into_iter()
        .map(|(lat, lng)| LatLng { lat, lng })
        .collect();

    let actual_waypoints = snapped_or_input(path.snapped_waypoints.as_ref(), waypoints);

    RoutingOutcome::Route(RouteResult {
        name: String::new(),
        coordinates,
        summary: RouteSummary {
            total_distance: path.distance,
            total_time: path.time as f64 / 1000.0, // ms -> s
        },
        instructions: path.instructions,
        actual_waypoints,
    })
}

/// Waypoints ajustados por el motor, o los de entrada si
/// `snapped_waypoints.coordinates` falta o no es un array bien
/// formado de pares [lon, lat]
fn snapped_or_input(snapped: Option<&serde_json::Value>, waypoints: &[Waypoint]) -> Vec<LatLng> {
    let fallback = || {
        waypoints
            .iter()
            .map(|wp| LatLng {
                lat: wp.latitude,
                lng: wp.longitude,
            })
            .collect()
    };

    let Some(coords) = snapped
        .and_then(|s| s.get("coordinates"))
        .and_then(|c| c.as_array())
    else {
        return fallback();
    };

    let mut out = Vec::with_capacity(coords.len());
    for pair in coords {
        let lon = pair.get(0).and_then(serde_json::Value::as_f64);
        let lat = pair.get(1).and_then(serde_json::Value::as_f64);
        match (lon, lat) {
            (Some(lon), Some(lat)) => out.push(LatLng { lat, lng: lon }),
            _ => return fallback(),
        }
    }

    out
}

fn routing_failure(message: String) -> RoutingOutcome {
    RoutingOutcome::Failure(RoutingFailure {
        status: -1,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> RoutingService {
        RoutingService::new("http://localhost:8989/route".to_string(), "truck1".to_string())
    }

    fn vancouver_waypoints() -> Vec<Waypoint> {
        vec![
            Waypoint { latitude: 49.33, longitude: -123.03 },
            Waypoint { latitude: 49.25, longitude: -122.97 },
        ]
    }

    #[test]
    fn test_request_points_are_lon_lat() {
        let request = service().build_request(
            &vancouver_waypoints(),
            &VehicleConstraints::default(),
            None,
        );

        assert_eq!(request.profile, "truck1");
        assert_eq!(request.points, vec![[-123.03, 49.33], [-122.97, 49.25]]);
    }

    #[test]
    fn test_height_constraint_becomes_exclusion_rule() {
        let constraints = VehicleConstraints {
            height_limit: Some(1.2),
            ..Default::default()
        };
        let request = service().build_request(&vancouver_waypoints(), &constraints, Some("truck1"));

        let body = serde_json::to_value(&request).unwrap();
        let priority = body["custom_model"]["priority"].as_array().unwrap();

        assert!(priority.contains(&json!({ "if": "max_height < 1.2", "multiply_by": "0" })));
    }

    #[test]
    fn test_missing_limits_default_to_one() {
        let request = service().build_request(
            &vancouver_waypoints(),
            &VehicleConstraints::default(),
            None,
        );

        let conditions: Vec<&str> = request
            .custom_model
            .priority
            .iter()
            .map(|rule| rule.condition.as_str())
            .collect();

        assert_eq!(
            conditions,
            vec!["max_height < 1", "max_weight < 1", "max_width < 1"]
        );
    }

    #[test]
    fn test_non_positive_limits_default_to_one() {
        let constraints = VehicleConstraints {
            height_limit: Some(0.0),
            weight_limit: Some(-3.5),
            width_limit: Some(2.5),
        };
        let request = service().build_request(&vancouver_waypoints(), &constraints, None);

        let conditions: Vec<&str> = request
            .custom_model
            .priority
            .iter()
            .map(|rule| rule.condition.as_str())
            .collect();

        assert_eq!(
            conditions,
            vec!["max_height < 1", "max_weight < 1", "max_width < 2.5"]
        );
    }

    #[test]
    fn test_all_rules_exclude_not_penalize() {
        let constraints = VehicleConstraints {
            height_limit: Some(3.1),
            weight_limit: Some(12.0),
            width_limit: Some(2.4),
        };
        let request = service().build_request(&vancouver_waypoints(), &constraints, None);

        for rule in &request.custom_model.priority {
            assert_eq!(rule.multiply_by, "0");
        }
    }

    fn sample_path(snapped: Option<serde_json::Value>) -> GraphHopperPath {
        GraphHopperPath {
            points: "_p~iF~ps|U_ulLnnqC_mqNvxq`@".to_string(),
            distance: 12345.6,
            time: 87000,
            instructions: Vec::new(),
            snapped_waypoints: snapped,
        }
    }

    #[test]
    fn test_decode_path_geometry_and_units() {
        let outcome = decode_path(sample_path(None), &vancouver_waypoints());

        let RoutingOutcome::Route(route) = outcome else {
            panic!("expected a route");
        };

        assert_eq!(route.coordinates.len(), 3);
        assert_eq!(route.coordinates[0], LatLng { lat: 38.5, lng: -120.2 });
        assert_eq!(route.summary.total_distance, 12345.6);
        // 87000 ms normalizados a segundos en la frontera
        assert_eq!(route.summary.total_time, 87.0);
        assert!(route.instructions.is_empty());
    }

    #[test]
    fn test_snapped_waypoints_used_when_present() {
        let snapped = json!({ "coordinates": [[-123.031, 49.329], [-122.969, 49.251]] });
        let outcome = decode_path(sample_path(Some(snapped)), &vancouver_waypoints());

        let RoutingOutcome::Route(route) = outcome else {
            panic!("expected a route");
        };

        assert_eq!(
            route.actual_waypoints,
            vec![
                LatLng { lat: 49.329, lng: -123.031 },
                LatLng { lat: 49.251, lng: -122.969 },
            ]
        );
    }

    #[test]
    fn test_fallback_when_snapped_absent() {
        let outcome = decode_path(sample_path(None), &vancouver_waypoints());

        let RoutingOutcome::Route(route) = outcome else {
            panic!("expected a route");
        };

        // Mismos waypoints de entrada, mismo orden y cuenta
        assert_eq!(
            route.actual_waypoints,
            vec![
                LatLng { lat: 49.33, lng: -123.03 },
                LatLng { lat: 49.25, lng: -122.97 },
            ]
        );
    }

    #[test]
    fn test_fallback_when_snapped_not_an_array() {
        let outcome = decode_path(
            sample_path(Some(json!({ "coordinates": "garbage" }))),
            &vancouver_waypoints(),
        );

        let RoutingOutcome::Route(route) = outcome else {
            panic!("expected a route");
        };

        assert_eq!(route.actual_waypoints.len(), 2);
        assert_eq!(route.actual_waypoints[0], LatLng { lat: 49.33, lng: -123.03 });
    }

    #[test]
    fn test_fallback_when_snapped_pair_malformed() {
        let snapped = json!({ "coordinates": [[-123.031, 49.329], ["x", null]] });
        let outcome = decode_path(sample_path(Some(snapped)), &vancouver_waypoints());

        let RoutingOutcome::Route(route) = outcome else {
            panic!("expected a route");
        };

        assert_eq!(route.actual_waypoints[1], LatLng { lat: 49.25, lng: -122.97 });
    }

    #[test]
    fn test_empty_paths_is_failure() {
        let outcome = decode_response(
            GraphHopperResponse { paths: Vec::new() },
            &vancouver_waypoints(),
        );

        let RoutingOutcome::Failure(failure) = outcome else {
            panic!("expected a failure marker");
        };

        assert_eq!(failure.status, -1);
    }

    #[test]
    fn test_bad_polyline_is_failure() {
        let mut path = sample_path(None);
        path.points = "_p~iF".to_string(); // truncado

        let outcome = decode_path(path, &vancouver_waypoints());
        assert!(matches!(outcome, RoutingOutcome::Failure(f) if f.status == -1));
    }

    #[test]
    fn test_overlong_geometry_is_failure_not_panic() {
        // Geometría con un varint interminable controlada por el motor
        let mut path = sample_path(None);
        path.points = "~".repeat(20);

        let outcome = decode_path(path, &vancouver_waypoints());
        assert!(matches!(outcome, RoutingOutcome::Failure(f) if f.status == -1));
    }
}
