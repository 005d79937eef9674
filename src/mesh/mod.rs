//! Static mesh dataset: positions, per-vertex colours and triangle indices.

pub mod cloth;

use glam::Vec3;

use crate::error::MeshError;

pub const COORDS_PER_NODE: usize = 3;
pub const COLOR_COMPONENTS: usize = 3;

/// Immutable vertex/colour/index tables, validated once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u16>,
}

impl Mesh {
    pub fn new(
        positions: Vec<f32>,
        colors: Vec<f32>,
        indices: Vec<u16>,
    ) -> Result<Self, MeshError> {
        if positions.len() % COORDS_PER_NODE != 0 {
            return Err(MeshError::RaggedPositions(positions.len()));
        }
        if colors.len() != positions.len() {
            return Err(MeshError::ColorCountMismatch {
                positions: positions.len(),
                colors: colors.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedIndices(indices.len()));
        }
        let vertex_count = positions.len() / COORDS_PER_NODE;
        if vertex_count > usize::from(u16::MAX) + 1 {
            return Err(MeshError::TooManyVertices(vertex_count));
        }
        if let Some((slot, &value)) = colors
            .iter()
            .enumerate()
            .find(|&(_, &c)| !(0.0..=1.0).contains(&c))
        {
            return Err(MeshError::ColorOutOfRange { slot, value });
        }
        if let Some((slot, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| usize::from(i) >= vertex_count)
        {
            return Err(MeshError::IndexOutOfBounds {
                slot,
                index,
                vertex_count,
            });
        }

        Ok(Self {
            positions,
            colors,
            indices,
        })
    }

    /// The baked cloth box.
    pub fn cloth() -> Result<Self, MeshError> {
        Self::new(
            cloth::POSITIONS.to_vec(),
            cloth::COLORS.to_vec(),
            cloth::INDICES.to_vec(),
        )
    }

    /// Builds a heat-map mesh from raw node coordinates and one scalar per node.
    ///
    /// Coordinates are divided by the exact largest absolute component (not an
    /// integer-truncated one) so the mesh fits `[-1, 1]`; colours follow
    /// [`heat_color`] over the field's range.
    pub fn from_temperature_field(
        coords: &[[f32; 3]],
        temperatures: &[f32],
        indices: Vec<u16>,
    ) -> Result<Self, MeshError> {
        if coords.len() != temperatures.len() {
            return Err(MeshError::FieldLengthMismatch {
                nodes: coords.len(),
                values: temperatures.len(),
            });
        }

        let max_coord = coords
            .iter()
            .flatten()
            .fold(0.0_f32, |acc, c| acc.max(c.abs()));
        let scale = if max_coord > 0.0 { 1.0 / max_coord } else { 1.0 };
        let positions = coords.iter().flatten().map(|c| c * scale).collect();

        let (min, max) = temperatures
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &t| {
                (lo.min(t), hi.max(t))
            });
        let colors = temperatures
            .iter()
            .flat_map(|&t| heat_color(t, min, max))
            .collect();

        Self::new(positions, colors, indices)
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / COORDS_PER_NODE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, vertex: usize) -> Option<Vec3> {
        self.positions
            .chunks_exact(COORDS_PER_NODE)
            .nth(vertex)
            .map(Vec3::from_slice)
    }

    /// Positions followed by colours, the layout of the single vertex buffer.
    pub fn vertex_buffer_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.positions.len() + self.colors.len());
        data.extend_from_slice(&self.positions);
        data.extend_from_slice(&self.colors);
        data
    }

    /// Byte offset of the colour block inside [`Mesh::vertex_buffer_data`].
    pub fn color_offset_bytes(&self) -> usize {
        self.positions.len() * std::mem::size_of::<f32>()
    }

    /// Axis-aligned `(min, max)` corners, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.chunks_exact(COORDS_PER_NODE).map(Vec3::from_slice);
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Red/blue ramp used for the temperature field: cold is blue, hot is red.
///
/// A degenerate range maps everything to the cold end.
pub fn heat_color(value: f32, min: f32, max: f32) -> [f32; 3] {
    let delta = max - min;
    let t = if delta > 0.0 {
        ((value - min) / delta).clamp(0.0, 1.0)
    } else {
        0.0
    };
    [t, 0.0, 1.0 - t]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap()
    }

    #[test]
    fn cloth_dataset_is_valid() {
        let mesh = Mesh::cloth().unwrap();
        assert_eq!(mesh.vertex_count(), cloth::NODE_COUNT);
        assert_eq!(mesh.triangle_count(), cloth::TRIANGLE_COUNT);
        assert_eq!(mesh.colors().len(), mesh.positions().len());

        let (lo, hi) = mesh.bounds().unwrap();
        assert!(lo.min_element() >= -1.0 && hi.max_element() <= 1.0);
    }

    #[test]
    fn vertex_buffer_puts_colors_after_positions() {
        let mesh = quad();
        let data = mesh.vertex_buffer_data();
        assert_eq!(data.len(), 24);
        assert_eq!(mesh.color_offset_bytes(), 12 * 4);
        assert_eq!(&data[..12], mesh.positions());
        assert_eq!(&data[12..], mesh.colors());
    }

    #[test]
    fn rejects_broken_tables() {
        assert_eq!(
            Mesh::new(vec![0.0; 4], vec![0.0; 4], vec![]),
            Err(MeshError::RaggedPositions(4))
        );
        assert_eq!(
            Mesh::new(vec![0.0; 6], vec![0.0; 3], vec![]),
            Err(MeshError::ColorCountMismatch {
                positions: 6,
                colors: 3
            })
        );
        assert_eq!(
            Mesh::new(vec![0.0; 9], vec![0.0; 9], vec![0, 1]),
            Err(MeshError::RaggedIndices(2))
        );
        assert_eq!(
            Mesh::new(vec![0.0; 9], vec![0.0; 9], vec![0, 1, 3]),
            Err(MeshError::IndexOutOfBounds {
                slot: 2,
                index: 3,
                vertex_count: 3
            })
        );
        assert_eq!(
            Mesh::new(vec![0.0; 3], vec![0.0, 1.5, 0.0], vec![]),
            Err(MeshError::ColorOutOfRange { slot: 1, value: 1.5 })
        );
    }

    #[test]
    fn vertex_count_limited_by_u16_indices() {
        let max = usize::from(u16::MAX) + 1;
        let mesh = Mesh::new(vec![0.0; max * 3], vec![0.0; max * 3], vec![0, 1, u16::MAX]).unwrap();
        assert_eq!(mesh.vertex_count(), max);

        assert_eq!(
            Mesh::new(vec![0.0; (max + 1) * 3], vec![0.0; (max + 1) * 3], vec![]),
            Err(MeshError::TooManyVertices(max + 1))
        );
    }

    #[test]
    fn heat_color_ramp() {
        assert_eq!(heat_color(10.0, 10.0, 20.0), [0.0, 0.0, 1.0]);
        assert_eq!(heat_color(20.0, 10.0, 20.0), [1.0, 0.0, 0.0]);
        assert_eq!(heat_color(15.0, 10.0, 20.0), [0.5, 0.0, 0.5]);
        assert_eq!(heat_color(3.0, 3.0, 3.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn temperature_field_is_normalised() {
        let coords = [[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, -2.0, 1.0]];
        let mesh =
            Mesh::from_temperature_field(&coords, &[100.0, 300.0, 200.0], vec![0, 1, 2]).unwrap();

        assert_eq!(mesh.position(1), Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(mesh.position(2), Some(Vec3::new(0.0, -0.5, 0.25)));
        assert_eq!(&mesh.colors()[..3], &[0.0, 0.0, 1.0]);
        assert_eq!(&mesh.colors()[3..6], &[1.0, 0.0, 0.0]);
        assert_eq!(&mesh.colors()[6..], &[0.5, 0.0, 0.5]);

        assert_eq!(
            Mesh::from_temperature_field(&coords, &[1.0], vec![]),
            Err(MeshError::FieldLengthMismatch {
                nodes: 3,
                values: 1
            })
        );
    }
}
