//! Layered drawing of the bus network.

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, Stop};

use super::projector::SphereProjector;
use super::settings::RenderSettings;
use super::svg::{
    Circle, Color, Document, Polyline, StrokeLineCap, StrokeLineJoin, Styled, Text,
};

const FONT_FAMILY: &str = "Verdana";

/// Draws the network map as an SVG document.
///
/// Layers, bottom to top: route lines, route labels, stop circles, stop
/// labels. Buses are taken in name order and stops are those served by at
/// least one bus, also in name order.
pub struct MapRenderer<'a> {
    catalogue: &'a TransportCatalogue,
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, settings: &'a RenderSettings) -> Self {
        Self {
            catalogue,
            settings,
        }
    }

    pub fn render(&self) -> Document {
        let stops = self.catalogue.served_stops_by_name();
        let buses: Vec<&Bus> = self
            .catalogue
            .buses_by_name()
            .into_iter()
            .filter(|bus| !bus.stops().is_empty())
            .collect();

        let projector = SphereProjector::new(
            stops.iter().map(|stop| &stop.coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut doc = Document::new();
        self.draw_route_lines(&mut doc, &buses, &projector);
        self.draw_route_labels(&mut doc, &buses, &projector);
        self.draw_stop_circles(&mut doc, &stops, &projector);
        self.draw_stop_labels(&mut doc, &stops, &projector);

        debug!(
            buses = buses.len(),
            stops = stops.len(),
            shapes = doc.shapes().len(),
            "Map rendered"
        );
        doc
    }

    fn draw_route_lines(&self, doc: &mut Document, buses: &[&Bus], projector: &SphereProjector) {
        for (index, bus) in buses.iter().enumerate() {
            let points = bus
                .route_stops()
                .into_iter()
                .map(|id| projector.project(&self.catalogue.stop(id).coordinates));
            doc.add(
                Polyline::new(points)
                    .fill(Color::None)
                    .stroke(self.settings.palette_color(index))
                    .stroke_width(self.settings.line_width)
                    .line_cap(StrokeLineCap::Round)
                    .line_join(StrokeLineJoin::Round),
            );
        }
    }

    fn draw_route_labels(&self, doc: &mut Document, buses: &[&Bus], projector: &SphereProjector) {
        for (index, bus) in buses.iter().enumerate() {
            for terminal in bus.terminals() {
                let position = projector.project(&self.catalogue.stop(terminal).coordinates);
                let label = Text::new(bus.name.as_str())
                    .position(position)
                    .offset(self.settings.bus_label_offset)
                    .font_size(self.settings.bus_label_font_size)
                    .font_family(FONT_FAMILY)
                    .font_weight("bold");

                doc.add(self.underlayer(label.clone()));
                doc.add(label.fill(self.settings.palette_color(index)));
            }
        }
    }

    fn draw_stop_circles(&self, doc: &mut Document, stops: &[&Stop], projector: &SphereProjector) {
        for stop in stops {
            doc.add(
                Circle::new(
                    projector.project(&stop.coordinates),
                    self.settings.stop_radius,
                )
                .fill(Color::named("white")),
            );
        }
    }

    fn draw_stop_labels(&self, doc: &mut Document, stops: &[&Stop], projector: &SphereProjector) {
        for stop in stops {
            let label = Text::new(stop.name.as_str())
                .position(projector.project(&stop.coordinates))
                .offset(self.settings.stop_label_offset)
                .font_size(self.settings.stop_label_font_size)
                .font_family(FONT_FAMILY);

            doc.add(self.underlayer(label.clone()));
            doc.add(label.fill(Color::named("black")));
        }
    }

    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}

/// Render the catalogue's map to SVG text.
pub fn render_map(catalogue: &TransportCatalogue, settings: &RenderSettings) -> String {
    MapRenderer::new(catalogue, settings).render().to_string()
}
