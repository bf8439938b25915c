//! The loaded transit base: catalogue, router and rendered map.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalogue::{CatalogueBuilder, CatalogueError, TransportCatalogue};
use crate::domain::Coordinates;
use crate::render::{RenderSettings, render_map};
use crate::router::{RouterError, RoutingSettings, TransportRouter};

use super::dto::BaseRequest;

/// Build a catalogue from `base_requests`, in any order.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut builder = CatalogueBuilder::new();
    for request in requests {
        match request {
            BaseRequest::Stop {
                name,
                latitude,
                longitude,
                road_distances,
            } => {
                builder.add_stop(name.as_str(), Coordinates::new(*latitude, *longitude)?);
                for (neighbour, meters) in road_distances {
                    builder.add_distance(name.as_str(), neighbour.as_str(), *meters);
                }
            }
            BaseRequest::Bus {
                name,
                stops,
                is_roundtrip,
            } => {
                builder.add_bus(name.as_str(), stops.iter().map(String::as_str), *is_roundtrip);
            }
        }
    }
    builder.build()
}

/// Everything needed to answer stat requests.
///
/// The router is absent when the base was built without routing settings;
/// route queries then report [`RouterError::NotInitialized`].
#[derive(Debug)]
pub struct TransitBase {
    catalogue: Arc<TransportCatalogue>,
    router: Option<TransportRouter>,
    map: Option<String>,
}

impl TransitBase {
    /// Publish a base, building the router and map from the given settings.
    ///
    /// # Errors
    ///
    /// Fails when the router cannot be built.
    pub fn new(
        catalogue: TransportCatalogue,
        routing_settings: Option<RoutingSettings>,
        render_settings: Option<RenderSettings>,
    ) -> Result<Self, RouterError> {
        let catalogue = Arc::new(catalogue);

        let router = match routing_settings {
            Some(settings) => Some(TransportRouter::build(Arc::clone(&catalogue), settings)?),
            None => {
                warn!("No routing settings; route requests will fail");
                None
            }
        };

        let map = render_settings
            .as_ref()
            .map(|settings| render_map(&catalogue, settings));

        info!(
            stops = catalogue.stops().len(),
            buses = catalogue.buses().len(),
            routing = router.is_some(),
            map = map.is_some(),
            "Transit base ready"
        );

        Ok(Self {
            catalogue,
            router,
            map,
        })
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// The router, or [`RouterError::NotInitialized`] without routing settings.
    pub fn router(&self) -> Result<&TransportRouter, RouterError> {
        self.router.as_ref().ok_or(RouterError::NotInitialized)
    }

    /// The rendered SVG map, if render settings were given.
    pub fn map(&self) -> Option<&str> {
        self.map.as_deref()
    }
}
