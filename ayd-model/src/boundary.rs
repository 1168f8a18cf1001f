use geo_types::{Geometry, MultiPolygon};
use geojson::{FeatureCollection, GeoJson};

/// A closed lon/lat ring of a country outline.
pub type Ring = Vec<(f64, f64)>;

/// One country outline from the world boundary dataset.
///
/// `name` comes from the feature's `properties.name` and is the join key
/// against [`crate::YieldRecord::area`]. Outer and hole rings are kept
/// flat; the path serializer closes each ring independently, which is all
/// a fill-rule based renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub name: String,
    pub rings: Vec<Ring>,
}

/// The parsed world boundary collection.
///
/// Loaded once and shared read-only by all four choropleth maps. Features
/// without a name or with non-areal geometry are skipped at parse time;
/// a name that never matches a yield record simply renders with the
/// neutral fill downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldAtlas {
    pub features: Vec<BoundaryFeature>,
}

impl WorldAtlas {
    /// Parse a GeoJSON FeatureCollection into boundary features.
    pub fn from_geojson_str(raw: &str) -> anyhow::Result<Self> {
        let geojson: GeoJson = raw.parse()?;
        let collection = FeatureCollection::try_from(geojson)?;

        let mut features = Vec::with_capacity(collection.features.len());
        let mut skipped = 0usize;
        for feature in collection.features {
            let name = feature
                .properties
                .as_ref()
                .and_then(|p| p.get("name"))
                .and_then(|v| v.as_str())
                .map(str::to_owned);
            let (Some(name), Some(geometry)) = (name, feature.geometry) else {
                skipped += 1;
                continue;
            };

            let geometry: Geometry<f64> = geometry.value.try_into()?;
            let polygons: MultiPolygon<f64> = match geometry {
                Geometry::Polygon(p) => p.into(),
                Geometry::MultiPolygon(mp) => mp,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let mut rings = Vec::new();
            for polygon in &polygons {
                rings.push(ring_coords(polygon.exterior()));
                for interior in polygon.interiors() {
                    rings.push(ring_coords(interior));
                }
            }
            features.push(BoundaryFeature { name, rings });
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} boundary features without name or areal geometry");
        }
        Ok(WorldAtlas { features })
    }
}

fn ring_coords(line: &geo_types::LineString<f64>) -> Ring {
    line.coords().map(|c| (c.x, c.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Chad" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[14.0, 13.0], [15.0, 13.0], [15.0, 14.0], [14.0, 13.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Fiji" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[177.0, -17.0], [178.0, -17.0], [178.0, -18.0], [177.0, -17.0]]],
                        [[[179.0, -16.0], [180.0, -16.0], [180.0, -17.0], [179.0, -16.0]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "name": "Null Island" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            }
        ]
    }"#;

    #[test]
    fn test_parse_polygon_and_multipolygon() {
        let atlas = WorldAtlas::from_geojson_str(WORLD).unwrap();
        assert_eq!(atlas.features.len(), 2);

        let chad = &atlas.features[0];
        assert_eq!(chad.name, "Chad");
        assert_eq!(chad.rings.len(), 1);
        assert_eq!(chad.rings[0][0], (14.0, 13.0));

        let fiji = &atlas.features[1];
        assert_eq!(fiji.name, "Fiji");
        assert_eq!(fiji.rings.len(), 2);
    }

    #[test]
    fn test_nameless_and_point_features_are_skipped() {
        let atlas = WorldAtlas::from_geojson_str(WORLD).unwrap();
        assert!(atlas.features.iter().all(|f| f.name != "Null Island"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(WorldAtlas::from_geojson_str("{not geojson").is_err());
    }
}
