//! Projection of geographic coordinates onto the map canvas.

use crate::domain::Coordinates;

use super::svg::Point;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Linear projection fitting a set of points into a padded canvas.
///
/// Longitude grows to the right and latitude grows upwards. The scale is the
/// smaller of the width and height fits; an axis with no extent is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereProjector {
    padding: f64,
    min_lng: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new<'a>(
        points: impl IntoIterator<Item = &'a Coordinates>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter().peekable();
        if points.peek().is_none() {
            return Self {
                padding,
                ..Self::default()
            };
        }

        let (mut min_lng, mut max_lng) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_lng = min_lng.min(point.lng);
            max_lng = max_lng.max(point.lng);
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
        }

        let width_zoom =
            (!is_zero(max_lng - min_lng)).then(|| (width - 2.0 * padding) / (max_lng - min_lng));
        let height_zoom =
            (!is_zero(max_lat - min_lat)).then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self {
            padding,
            min_lng,
            max_lat,
            zoom,
        }
    }

    pub fn project(&self, coordinates: &Coordinates) -> Point {
        Point::new(
            (coordinates.lng - self.min_lng) * self.zoom + self.padding,
            (self.max_lat - coordinates.lat) * self.zoom + self.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn corners_map_to_padded_canvas() {
        let points = [coords(10.0, 20.0), coords(12.0, 24.0)];
        // width fit 200/4 = 50, height fit 100/2 = 50
        let projector = SphereProjector::new(&points, 250.0, 150.0, 25.0);

        assert_eq!(projector.project(&points[0]), Point::new(25.0, 125.0));
        assert_eq!(projector.project(&points[1]), Point::new(225.0, 25.0));
    }

    #[test]
    fn uses_the_tighter_axis() {
        let points = [coords(0.0, 0.0), coords(1.0, 10.0)];
        let projector = SphereProjector::new(&points, 100.0, 100.0, 0.0);
        // width fit 10, height fit 100
        assert_eq!(projector.project(&points[1]), Point::new(100.0, 0.0));
        assert_eq!(projector.project(&points[0]), Point::new(0.0, 10.0));
    }

    #[test]
    fn single_axis_extent() {
        let points = [coords(5.0, 1.0), coords(5.0, 3.0)];
        let projector = SphereProjector::new(&points, 100.0, 10.0, 0.0);
        assert_eq!(projector.project(&points[1]), Point::new(100.0, 0.0));
    }

    #[test]
    fn single_point_collapses_to_padding() {
        let points = [coords(55.0, 37.0)];
        let projector = SphereProjector::new(&points, 600.0, 400.0, 50.0);
        assert_eq!(projector.project(&points[0]), Point::new(50.0, 50.0));
    }

    #[test]
    fn no_points() {
        let projector = SphereProjector::new(&[] as &[Coordinates], 600.0, 400.0, 50.0);
        assert_eq!(projector.project(&coords(1.0, 1.0)).x, 50.0);
    }
}
