//! Growable two-directional tape

/// Width of one cell in layout units, as reported by [`Tape::occupied_width`]
pub const CELL_SPAN: f64 = 1.0;

/// Gap between neighbouring cells in layout units
pub const CELL_GAP: f64 = CELL_SPAN * 0.125;

/// The tape: a never-empty run of signed 64-bit cells plus the current pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<i64>,
    pointer: usize,
}

impl Tape {
    /// Create a tape holding a single zero cell under the pointer
    pub fn new() -> Self {
        Tape {
            cells: vec![0],
            pointer: 0,
        }
    }

    /// Move one cell to the right, materializing a zero cell past the end
    pub fn move_pointer_right(&mut self) {
        let next = self.pointer + 1;
        if next >= self.cells.len() {
            self.cells.push(0);
        }
        self.pointer = next;
    }

    /// Move one cell to the left.
    ///
    /// At index 0 a zero cell is prepended and the pointer stays at 0, which
    /// now names the new cell. Every other index shifts up by one.
    pub fn move_pointer_left(&mut self) {
        if self.pointer == 0 {
            self.cells.insert(0, 0);
        } else {
            self.pointer -= 1;
        }
    }

    pub fn increment_cell(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement_cell(&mut self) {
        let cell = &mut self.cells[self.pointer];
        *cell = cell.wrapping_sub(1);
    }

    /// Value of the cell under the pointer
    pub fn read_cell(&self) -> i64 {
        self.cells[self.pointer]
    }

    /// Overwrite the cell under the pointer
    pub fn write_cell(&mut self, value: i64) {
        self.cells[self.pointer] = value;
    }

    /// Layout width of all materialized cells including the gaps between them
    pub fn occupied_width(&self) -> f64 {
        let n = self.cells.len() as f64;
        n * CELL_SPAN + (n - 1.0) * CELL_GAP
    }

    /// All materialized cells, leftmost first
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Index of the current cell within [`Tape::cells`]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of materialized cells (never zero)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_starts_with_single_zero_cell() {
        let tape = Tape::new();
        assert_eq!(tape.cells(), &[0]);
        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.read_cell(), 0);
    }

    #[test]
    fn test_right_appends_once() {
        let mut tape = Tape::new();
        tape.move_pointer_right();
        tape.move_pointer_right();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.pointer(), 2);

        // Revisiting materialized cells must not grow the tape
        tape.move_pointer_left();
        tape.move_pointer_right();
        assert_eq!(tape.len(), 3);
    }

    #[test]
    fn test_left_from_leftmost_prepends_and_rebases() {
        let mut tape = Tape::new();
        tape.write_cell(7);
        tape.move_pointer_left();

        assert_eq!(tape.pointer(), 0);
        assert_eq!(tape.read_cell(), 0);
        assert_eq!(tape.cells(), &[0, 7]);

        tape.move_pointer_right();
        assert_eq!(tape.pointer(), 1);
        assert_eq!(tape.read_cell(), 7);
    }

    #[test]
    fn test_walk_materializes_each_visited_position_once() {
        // 1 = right, 0 = left; logical positions tracked independently of rebasing
        let walk = [0, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 0];
        let mut tape = Tape::new();
        let mut logical: i64 = 0;
        let mut visited = FxHashSet::default();
        visited.insert(logical);

        for step in walk {
            if step == 1 {
                tape.move_pointer_right();
                logical += 1;
            } else {
                tape.move_pointer_left();
                logical -= 1;
            }
            visited.insert(logical);

            assert!(tape.pointer() < tape.len());
            assert_eq!(tape.len(), visited.len());
            let leftmost = *visited.iter().min().unwrap();
            assert_eq!(tape.pointer() as i64, logical - leftmost);
        }
    }

    #[test]
    fn test_cell_arithmetic_wraps_at_boundaries() {
        let mut tape = Tape::new();
        tape.write_cell(i64::MAX);
        tape.increment_cell();
        assert_eq!(tape.read_cell(), i64::MIN);
        tape.decrement_cell();
        assert_eq!(tape.read_cell(), i64::MAX);

        tape.write_cell(0);
        tape.decrement_cell();
        assert_eq!(tape.read_cell(), -1);
    }

    #[test]
    fn test_occupied_width_tracks_cell_count() {
        let mut tape = Tape::new();
        assert_eq!(tape.occupied_width(), CELL_SPAN);
        tape.move_pointer_right();
        tape.move_pointer_left();
        tape.move_pointer_left();
        assert_eq!(tape.occupied_width(), 3.0 * CELL_SPAN + 2.0 * CELL_GAP);
    }
}
