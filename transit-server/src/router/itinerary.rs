//! Translation of graph paths into rider-facing itineraries.

use serde::Serialize;

use super::builder::RouteGraph;
use super::search::RouteInfo;
use super::{RoutingSettings, Topology};

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    /// Wait at `stop_name` for the next bus.
    Wait { stop_name: String, time: f64 },

    /// Ride `bus` for `span_count` consecutive hops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Bus { time, .. } => *time,
        }
    }
}

/// A fastest trip: alternating waits and rides plus their total time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    /// Each edge becomes a wait at its boarding stop followed by the ride.
    pub(crate) fn from_route<T: Topology>(
        route: &RouteInfo,
        graph: &RouteGraph,
        topology: &T,
        settings: &RoutingSettings,
    ) -> Self {
        let wait = settings.wait_minutes();
        let mut items = Vec::with_capacity(route.edges.len() * 2);

        for &edge_id in &route.edges {
            let edge = graph.graph().edge(edge_id);
            let span = graph.span(edge_id);

            items.push(ItineraryItem::Wait {
                stop_name: topology.stop_name(graph.stop(edge.from)).to_string(),
                time: wait,
            });
            items.push(ItineraryItem::Bus {
                bus: topology.bus_name(span.bus).to_string(),
                span_count: span.span_count,
                time: edge.weight - wait,
            });
        }

        Self {
            total_time: route.weight,
            items,
        }
    }

    /// Number of buses boarded.
    pub fn boardings(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, ItineraryItem::Bus { .. }))
            .count()
    }
}
