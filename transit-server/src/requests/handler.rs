//! Stat request dispatch.

use tracing::debug;

use super::base::TransitBase;
use super::dto::{StatRequest, StatResponse};
use super::RequestError;

/// Answers stat requests against a loaded base.
pub struct RequestHandler<'a> {
    base: &'a TransitBase,
}

impl<'a> RequestHandler<'a> {
    pub fn new(base: &'a TransitBase) -> Self {
        Self { base }
    }

    /// Answer each request in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|request| self.handle(request)).collect()
    }

    /// Answer one request. Failures are reported inside the response.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        let response = match request {
            StatRequest::Bus { name, .. } => Ok(self.bus(id, name)),
            StatRequest::Stop { name, .. } => Ok(self.stop(id, name)),
            StatRequest::Map { .. } => self.map(id),
            StatRequest::Route { from, to, .. } => self.route(id, from, to),
        };

        response.unwrap_or_else(|err| {
            debug!(request_id = id, error = %err, "Request failed");
            StatResponse::error(id, err.to_string())
        })
    }

    fn bus(&self, id: i64, name: &str) -> StatResponse {
        match self.base.catalogue().bus_stat(name) {
            Some(stat) => StatResponse::bus(id, stat),
            None => StatResponse::not_found(id),
        }
    }

    fn stop(&self, id: i64, name: &str) -> StatResponse {
        match self.base.catalogue().stop_stat(name) {
            Some(stat) => StatResponse::Stop {
                request_id: id,
                buses: stat.buses.into_iter().map(str::to_string).collect(),
            },
            None => StatResponse::not_found(id),
        }
    }

    fn map(&self, id: i64) -> Result<StatResponse, RequestError> {
        let map = self.base.map().ok_or(RequestError::MapNotConfigured)?;
        Ok(StatResponse::Map {
            request_id: id,
            map: map.to_string(),
        })
    }

    fn route(&self, id: i64, from: &str, to: &str) -> Result<StatResponse, RequestError> {
        let router = self.base.router()?;
        Ok(match router.find_route(from, to) {
            Some(itinerary) => StatResponse::route(id, itinerary),
            None => StatResponse::not_found(id),
        })
    }
}
