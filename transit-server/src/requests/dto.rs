//! JSON documents accepted and produced by the request pipeline.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalogue::BusStat;
use crate::render::RenderSettings;
use crate::router::{Itinerary, ItineraryItem, RoutingSettings};

/// Where the built base is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializationSettings {
    pub file: PathBuf,
}

/// One entry of `base_requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Meters from this stop to its neighbours.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// Input of the `make_base` stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MakeBaseDocument {
    pub serialization_settings: SerializationSettings,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
}

/// Input of the `process_requests` stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessDocument {
    pub serialization_settings: SerializationSettings,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// One entry of `stat_requests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

pub const NOT_FOUND: &str = "not found";

/// Answer to one stat request, keyed by the request's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<ItineraryItem>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn bus(request_id: i64, stat: BusStat) -> Self {
        StatResponse::Bus {
            request_id,
            curvature: stat.curvature,
            route_length: stat.route_length,
            stop_count: stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }

    pub fn route(request_id: i64, itinerary: Itinerary) -> Self {
        StatResponse::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.items,
        }
    }

    pub fn not_found(request_id: i64) -> Self {
        Self::error(request_id, NOT_FOUND)
    }

    pub fn error(request_id: i64, message: impl Into<String>) -> Self {
        StatResponse::Error {
            request_id,
            error_message: message.into(),
        }
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus { request_id, .. }
            | StatResponse::Stop { request_id, .. }
            | StatResponse::Map { request_id, .. }
            | StatResponse::Route { request_id, .. }
            | StatResponse::Error { request_id, .. } => *request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_make_base_document() {
        let doc: MakeBaseDocument = serde_json::from_value(json!({
            "serialization_settings": {"file": "transport_catalogue.db"},
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "base_requests": [
                {
                    "type": "Stop",
                    "name": "Tolstopaltsevo",
                    "latitude": 55.611087,
                    "longitude": 37.20829,
                    "road_distances": {"Marushkino": 3900}
                },
                {
                    "type": "Bus",
                    "name": "750",
                    "stops": ["Tolstopaltsevo", "Marushkino"],
                    "is_roundtrip": false
                }
            ]
        }))
        .unwrap();

        assert_eq!(doc.serialization_settings.file, PathBuf::from("transport_catalogue.db"));
        assert_eq!(doc.routing_settings, Some(RoutingSettings::new(2, 30.0).unwrap()));
        assert!(doc.render_settings.is_none());
        assert_eq!(doc.base_requests.len(), 2);
        match &doc.base_requests[0] {
            BaseRequest::Stop { road_distances, .. } => {
                assert_eq!(road_distances.get("Marushkino"), Some(&3900));
            }
            other => panic!("expected stop, got {other:?}"),
        }
    }

    #[test]
    fn stop_without_distances() {
        let request: BaseRequest = serde_json::from_value(json!({
            "type": "Stop", "name": "A", "latitude": 1.0, "longitude": 2.0
        }))
        .unwrap();
        assert!(matches!(request, BaseRequest::Stop { road_distances, .. } if road_distances.is_empty()));
    }

    #[test]
    fn parse_stat_requests() {
        let doc: ProcessDocument = serde_json::from_value(json!({
            "serialization_settings": {"file": "base.db"},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "750"},
                {"id": 2, "type": "Stop", "name": "Marushkino"},
                {"id": 3, "type": "Map"},
                {"id": 4, "type": "Route", "from": "A", "to": "B"}
            ]
        }))
        .unwrap();

        let ids: Vec<i64> = doc.stat_requests.iter().map(StatRequest::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            doc.stat_requests[3],
            StatRequest::Route {
                id: 4,
                from: "A".into(),
                to: "B".into()
            }
        );
    }

    #[test]
    fn unknown_request_type_is_rejected() {
        let result: Result<StatRequest, _> =
            serde_json::from_value(json!({"id": 1, "type": "Train", "name": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn responses_serialize_flat() {
        assert_eq!(
            serde_json::to_value(StatResponse::not_found(7)).unwrap(),
            json!({"request_id": 7, "error_message": "not found"})
        );
        assert_eq!(
            serde_json::to_value(StatResponse::Stop {
                request_id: 2,
                buses: vec!["256".into(), "828".into()]
            })
            .unwrap(),
            json!({"request_id": 2, "buses": ["256", "828"]})
        );
        let bus = StatResponse::bus(
            1,
            BusStat {
                stop_count: 6,
                unique_stop_count: 5,
                route_length: 5950,
                curvature: 1.5,
            },
        );
        assert_eq!(
            serde_json::to_value(&bus).unwrap(),
            json!({
                "request_id": 1,
                "curvature": 1.5,
                "route_length": 5950,
                "stop_count": 6,
                "unique_stop_count": 5
            })
        );
        assert_eq!(bus.request_id(), 1);
    }
}
