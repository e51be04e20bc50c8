use crate::camera::Viewer;

/// Built-in 8x8 maze, indexed `[x][y]`: each inner array is one column of cells.
pub const REFERENCE_MAZE: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid layout is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidCell { x: usize, y: usize, value: u8 },

    #[error("border cell ({x}, {y}) is not a wall")]
    OpenBorder { x: usize, y: usize },

    #[error("viewer at ({x:.2}, {y:.2}) is not inside the grid interior")]
    ViewerOutside { x: f64, y: f64 },

    #[error("viewer stands inside wall cell ({x}, {y})")]
    ViewerInWall { x: usize, y: usize },
}

/// Occupancy grid whose border is guaranteed to be solid wall.
///
/// The guarantee lets the ray walk in [`crate::renderer`] index cells without
/// bounds checks: any ray starting inside the border reaches a wall before it
/// can leave the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>, // row-major, index = y * width + x
}

impl Grid {
    /// Builds a grid from 0/1 rows, rejecting anything that is not fully bordered.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cells = parse_rows(rows)?;
        let height = rows.len();
        let width = rows[0].as_ref().len();

        for y in 0..height {
            for x in 0..width {
                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if on_border && cells[y * width + x] != Cell::Wall {
                    return Err(GridError::OpenBorder { x, y });
                }
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Surrounds an arbitrary 0/1 layout with a one-cell wall border.
    pub fn with_border<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let inner = parse_rows(rows)?;
        let inner_w = rows[0].as_ref().len();
        let inner_h = rows.len();
        let width = inner_w + 2;
        let height = inner_h + 2;

        let mut cells = vec![Cell::Wall; width * height];
        for y in 0..inner_h {
            let dst = (y + 1) * width + 1;
            cells[dst..dst + inner_w].copy_from_slice(&inner[y * inner_w..(y + 1) * inner_w]);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from 0/1 columns, so `columns[x][y]` is cell (x, y).
    pub fn from_columns<C: AsRef<[u8]>>(columns: &[C]) -> Result<Self, GridError> {
        let height = columns.first().map_or(0, |c| c.as_ref().len());
        if let Some(x) = columns.iter().position(|c| c.as_ref().len() != height) {
            return Err(GridError::Ragged {
                row: x,
                expected: height,
                found: columns[x].as_ref().len(),
            });
        }

        let rows: Vec<Vec<u8>> = (0..height)
            .map(|y| columns.iter().map(|c| c.as_ref()[y]).collect())
            .collect();
        Self::from_rows(&rows)
    }

    pub fn reference() -> Self {
        Self::from_columns(&REFERENCE_MAZE).expect("reference maze is bordered")
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.cell(x, y) == Cell::Wall
    }

    /// The viewer must stand strictly inside the border, in an empty cell.
    pub fn check_viewer(&self, viewer: &Viewer) -> Result<(), GridError> {
        let [x, y] = viewer.pos;
        let inside = x.is_finite()
            && y.is_finite()
            && x >= 1.0
            && y >= 1.0
            && x < (self.width - 1) as f64
            && y < (self.height - 1) as f64;
        if !inside {
            return Err(GridError::ViewerOutside { x, y });
        }

        let (cx, cy) = (x.floor() as usize, y.floor() as usize);
        if self.is_wall(cx, cy) {
            return Err(GridError::ViewerInWall { x: cx, y: cy });
        }
        Ok(())
    }
}

fn parse_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Vec<Cell>, GridError> {
    let width = match rows.first() {
        Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
        _ => return Err(GridError::Empty),
    };

    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(GridError::Ragged {
                row: y,
                expected: width,
                found: row.len(),
            });
        }
        for (x, &value) in row.iter().enumerate() {
            let cell = Cell::from_value(value).ok_or(GridError::InvalidCell { x, y, value })?;
            cells.push(cell);
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_maze_is_valid() {
        let grid = Grid::reference();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);
        assert!(grid.is_wall(2, 2));
        assert!(!grid.is_wall(1, 1));
        assert!(grid.is_wall(3, 5));
        // Column-major literal: (3, 2) is a wall, (2, 3) is open.
        assert!(grid.is_wall(3, 2));
        assert!(!grid.is_wall(2, 3));
        assert!(grid.is_wall(5, 3));
    }

    #[test]
    fn from_columns_transposes() {
        let columns: [[u8; 3]; 4] = [[1, 1, 1], [1, 0, 1], [1, 1, 1], [1, 1, 1]];
        let grid = Grid::from_columns(&columns).unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert!(!grid.is_wall(1, 1));
        assert!(grid.is_wall(2, 1));

        let ragged: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1, 1]];
        assert!(matches!(
            Grid::from_columns(&ragged),
            Err(GridError::Ragged { row: 1, .. })
        ));
    }

    #[test]
    fn open_border_is_rejected() {
        let rows: [[u8; 3]; 3] = [[1, 1, 1], [1, 0, 0], [1, 1, 1]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::OpenBorder { x: 2, y: 1 })
        );
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));

        let ragged: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1, 1]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );

        let bad: [[u8; 3]; 3] = [[1, 1, 1], [1, 7, 1], [1, 1, 1]];
        assert_eq!(
            Grid::from_rows(&bad),
            Err(GridError::InvalidCell { x: 1, y: 1, value: 7 })
        );
    }

    #[test]
    fn with_border_pads_open_layout() {
        let rows: [[u8; 3]; 2] = [[0, 0, 0], [0, 1, 0]];
        let grid = Grid::with_border(&rows).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 4));
        for x in 0..5 {
            assert!(grid.is_wall(x, 0));
            assert!(grid.is_wall(x, 3));
        }
        assert!(!grid.is_wall(1, 1));
        assert!(grid.is_wall(2, 2));
        assert!(!grid.is_wall(3, 2));
    }

    #[test]
    fn viewer_placement_is_checked() {
        let grid = Grid::reference();
        let mut viewer = Viewer::new([1.5, 1.5], [1.0, 0.0], [0.0, 0.66]);
        assert!(grid.check_viewer(&viewer).is_ok());

        viewer.pos = [0.5, 1.5];
        assert!(matches!(
            grid.check_viewer(&viewer),
            Err(GridError::ViewerOutside { .. })
        ));

        viewer.pos = [2.5, 2.5];
        assert_eq!(
            grid.check_viewer(&viewer),
            Err(GridError::ViewerInWall { x: 2, y: 2 })
        );
    }
}
