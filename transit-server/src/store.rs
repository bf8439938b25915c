//! Persistence of the transit base between the build and query stages.
//!
//! The snapshot keeps the catalogue inputs and settings rather than derived
//! structures; loading rebuilds the catalogue, routing graph and map, which
//! is deterministic for the same inputs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalogue::CatalogueError;
use crate::render::RenderSettings;
use crate::requests::{BaseRequest, MakeBaseDocument, TransitBase, build_catalogue};
use crate::router::{RouterError, RoutingSettings};

/// Error from saving or loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalogue: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("cannot build router: {0}")]
    Router(#[from] RouterError),
}

/// Serialized form of a transit base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
}

impl From<MakeBaseDocument> for Snapshot {
    fn from(doc: MakeBaseDocument) -> Self {
        Self {
            base_requests: doc.base_requests,
            routing_settings: doc.routing_settings,
            render_settings: doc.render_settings,
        }
    }
}

impl Snapshot {
    /// Build the base this snapshot describes.
    pub fn restore(&self) -> Result<TransitBase, StoreError> {
        let catalogue = build_catalogue(&self.base_requests)?;
        Ok(TransitBase::new(
            catalogue,
            self.routing_settings,
            self.render_settings.clone(),
        )?)
    }

    /// Write the snapshot to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_vec(self)?;
        fs::write(path, json).map_err(io_err)?;

        info!(path = %path.display(), requests = self.base_requests.len(), "Snapshot saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let bytes = fs::read(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;

        info!(path = %path.display(), requests = snapshot.base_requests.len(), "Snapshot loaded");
        Ok(snapshot)
    }
}

/// Load a snapshot and rebuild its base.
pub fn load_base(path: &Path) -> Result<TransitBase, StoreError> {
    Snapshot::load(path)?.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn snapshot() -> Snapshot {
        Snapshot {
            base_requests: vec![
                BaseRequest::Stop {
                    name: "A".into(),
                    latitude: 55.0,
                    longitude: 37.0,
                    road_distances: BTreeMap::from([("B".to_string(), 600)]),
                },
                BaseRequest::Stop {
                    name: "B".into(),
                    latitude: 55.005,
                    longitude: 37.005,
                    road_distances: BTreeMap::new(),
                },
                BaseRequest::Bus {
                    name: "7".into(),
                    stops: vec!["A".into(), "B".into()],
                    is_roundtrip: false,
                },
            ],
            routing_settings: Some(RoutingSettings::new(3, 36.0).unwrap()),
            render_settings: Some(RenderSettings::default()),
        }
    }

    #[test]
    fn save_and_load_rebuilds_same_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("base.db");

        let saved = snapshot();
        saved.save(&path).unwrap();
        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded, saved);

        let before = saved.restore().unwrap();
        let after = load_base(&path).unwrap();
        assert_eq!(before.map(), after.map());
        assert_eq!(
            before.router().unwrap().find_route("B", "A"),
            after.router().unwrap().find_route("B", "A")
        );
        assert_eq!(
            before.catalogue().bus_stat("7"),
            after.catalogue().bus_stat("7")
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load(&dir.path().join("absent.db")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn corrupt_file_is_json_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), b"not json").unwrap();
        let err = Snapshot::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn unknown_stop_fails_restore() {
        let mut broken = snapshot();
        broken.base_requests.push(BaseRequest::Bus {
            name: "8".into(),
            stops: vec!["A".into(), "Z".into()],
            is_roundtrip: false,
        });
        assert!(matches!(
            broken.restore().unwrap_err(),
            StoreError::Catalogue(CatalogueError::UnknownStop { .. })
        ));
    }

    #[test]
    fn missing_distance_fails_restore() {
        let mut broken = snapshot();
        broken.base_requests.push(BaseRequest::Stop {
            name: "C".into(),
            latitude: 55.01,
            longitude: 37.01,
            road_distances: BTreeMap::new(),
        });
        broken.base_requests.push(BaseRequest::Bus {
            name: "9".into(),
            stops: vec!["B".into(), "C".into()],
            is_roundtrip: true,
        });
        assert!(matches!(
            broken.restore().unwrap_err(),
            StoreError::Router(RouterError::MissingDistance { .. })
        ));
    }
}
