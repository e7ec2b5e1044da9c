use std::fmt;

use crate::error::{Result, TopologyError};
use crate::math::ensure_positive;

/// Identifier of one face of the 12-face world, `1..=12` in the built-in atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey(pub u8);

impl fmt::Display for FaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face{}", self.0)
    }
}

/// Circumradius used by every face of the built-in atlas.
pub const DEFAULT_FACE_RADIUS: f64 = 180.0;

/// Default width of an edge trigger relative to its edge length.
pub const DEFAULT_EDGE_TRIGGER_SCALE: f64 = 0.4;

/// Data describing one room: its size and where each edge leads.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDefinition {
    /// This face's key.
    pub key: FaceKey,
    /// Circumradius of the face pentagon.
    pub radius: f64,
    /// Travel target across edge `i`, or `None` for no travel.
    pub neighbors: [Option<FaceKey>; 5],
    /// Trigger width as a fraction of edge length (also scales trigger depth).
    pub edge_trigger_scale: f64,
}

impl FaceDefinition {
    /// A definition with the default radius and trigger scale.
    #[must_use]
    pub fn new(key: FaceKey, neighbors: [Option<FaceKey>; 5]) -> Self {
        Self {
            key,
            radius: DEFAULT_FACE_RADIUS,
            neighbors,
            edge_trigger_scale: DEFAULT_EDGE_TRIGGER_SCALE,
        }
    }

    /// Sets the radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the edge trigger scale.
    #[must_use]
    pub fn with_edge_trigger_scale(mut self, scale: f64) -> Self {
        self.edge_trigger_scale = scale;
        self
    }

    /// Edge index leading to `target`, if any.
    #[must_use]
    pub fn edge_to(&self, target: FaceKey) -> Option<usize> {
        self.neighbors.iter().position(|n| *n == Some(target))
    }
}

/// Adjacency of the built-in world, listed per face in edge order.
const DODECAHEDRON_TABLE: [(u8, [u8; 5]); 12] = [
    (1, [2, 3, 4, 5, 6]),
    (2, [1, 3, 4, 5, 6]),
    (3, [1, 2, 9, 4, 7]),
    (4, [1, 3, 10, 5, 9]),
    (5, [1, 4, 11, 6, 10]),
    (6, [1, 5, 8, 2, 11]),
    (7, [2, 3, 9, 12, 8]),
    (8, [2, 6, 11, 12, 7]),
    (9, [3, 4, 10, 12, 7]),
    (10, [4, 5, 11, 12, 9]),
    (11, [6, 7, 12, 10, 8]),
    (12, [7, 8, 9, 10, 11]),
];

/// A table of face definitions.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    definitions: Vec<FaceDefinition>,
}

impl Atlas {
    /// Creates an atlas from explicit definitions (not yet validated).
    #[must_use]
    pub fn new(definitions: Vec<FaceDefinition>) -> Self {
        Self { definitions }
    }

    /// The built-in 12-face world (radius 180, trigger scale 0.4).
    #[must_use]
    pub fn dodecahedron() -> Self {
        let definitions = DODECAHEDRON_TABLE
            .iter()
            .map(|&(key, neighbors)| {
                FaceDefinition::new(FaceKey(key), neighbors.map(|n| Some(FaceKey(n))))
            })
            .collect();
        Self { definitions }
    }

    /// All definitions in table order.
    #[must_use]
    pub fn definitions(&self) -> &[FaceDefinition] {
        &self.definitions
    }

    /// Looks up a definition by key.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` for an unknown key.
    pub fn get(&self, key: FaceKey) -> std::result::Result<&FaceDefinition, TopologyError> {
        self.definitions
            .iter()
            .find(|d| d.key == key)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face definition {key}")))
    }

    /// Where edge `edge` of face `key` leads.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key or an edge index outside `0..5`.
    pub fn travel_target(
        &self,
        key: FaceKey,
        edge: usize,
    ) -> std::result::Result<Option<FaceKey>, TopologyError> {
        let def = self.get(key)?;
        def.neighbors.get(edge).copied().ok_or_else(|| {
            TopologyError::InvalidTopology(format!("edge index {edge} out of range"))
        })
    }

    /// Checks keys are unique, sizes are positive, and every neighbor
    /// reference names another defined face.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::InvalidTopology` for duplicate keys, dangling
    /// or self references, and `GeometryError::InvalidArgument` for a bad
    /// radius or trigger scale.
    pub fn validate(&self) -> Result<()> {
        for (i, def) in self.definitions.iter().enumerate() {
            if self.definitions[..i].iter().any(|d| d.key == def.key) {
                return Err(TopologyError::InvalidTopology(format!(
                    "duplicate face key {}",
                    def.key
                ))
                .into());
            }
            ensure_positive(def.radius, "face radius")?;
            ensure_positive(def.edge_trigger_scale, "edge trigger scale")?;
            for target in def.neighbors.iter().flatten() {
                if *target == def.key {
                    return Err(TopologyError::InvalidTopology(format!(
                        "{} travels to itself",
                        def.key
                    ))
                    .into());
                }
                if self.get(*target).is_err() {
                    return Err(TopologyError::InvalidTopology(format!(
                        "{} references undefined {target}",
                        def.key
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}
