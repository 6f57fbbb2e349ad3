use foundation::math::Vec3;

/// One quad of the latitude/longitude grid, addressed by its south-west
/// corner: `0 <= i < lat_lines`, `0 <= j < lon_lines`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
}

impl Cell {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Latitude/longitude sphere grid.
///
/// Vertices are generated once at construction and immutable afterwards:
/// `(lat_lines + 1) * (lon_lines + 1)` entries in row-major order (latitude
/// outer, longitude inner). The seam column at `j = lon_lines` duplicates
/// column 0 so grid indexing stays uniform; cell corner lookups wrap in
/// longitude but not in latitude.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    radius: f64,
    lat_lines: usize,
    lon_lines: usize,
    vertices: Vec<Vec3>,
}

impl SphereMesh {
    pub fn new(radius: f64, lat_lines: usize, lon_lines: usize) -> Self {
        let mut vertices = Vec::with_capacity((lat_lines + 1) * (lon_lines + 1));
        for i in 0..=lat_lines {
            // Latitude runs pole to pole: -π/2 at row 0, +π/2 at the last row.
            let lat = std::f64::consts::PI / lat_lines as f64 * i as f64
                - std::f64::consts::FRAC_PI_2;
            for j in 0..=lon_lines {
                let lon = 2.0 * std::f64::consts::PI / lon_lines as f64 * j as f64;
                vertices.push(Vec3::new(
                    radius * lat.cos() * lon.cos(),
                    radius * lat.sin(),
                    radius * lat.cos() * lon.sin(),
                ));
            }
        }
        Self {
            radius,
            lat_lines,
            lon_lines,
            vertices,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn lat_lines(&self) -> usize {
        self.lat_lines
    }

    pub fn lon_lines(&self) -> usize {
        self.lon_lines
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Flat index of the grid vertex at row `i`, column `j`.
    pub fn vertex_index(&self, i: usize, j: usize) -> usize {
        i * (self.lon_lines + 1) + j
    }

    /// Vertex indices of a cell's four corners, in draw order:
    /// `(i,j)`, `(i,j+1)`, `(i+1,j+1)`, `(i+1,j)`, wrapping in longitude.
    pub fn cell_corner_indices(&self, cell: Cell) -> [usize; 4] {
        let next_j = (cell.j + 1) % (self.lon_lines + 1);
        [
            self.vertex_index(cell.i, cell.j),
            self.vertex_index(cell.i, next_j),
            self.vertex_index(cell.i + 1, next_j),
            self.vertex_index(cell.i + 1, cell.j),
        ]
    }

    /// All cells in row-major order (latitude outer, longitude inner).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.lat_lines)
            .flat_map(move |i| (0..self.lon_lines).map(move |j| Cell::new(i, j)))
    }
}
