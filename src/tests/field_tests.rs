#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{BlockId, Cell, Position};
    use crate::field::Field;
    use crate::tests::test_utils::{fill_row, filler_id};

    #[test]
    fn test_new_field_has_walls() {
        let field = Field::new(10, 20);
        assert_eq!(field.width(), 10);
        assert_eq!(field.height(), 20);

        for y in 0..=20 {
            assert_eq!(field.cell(0, y), Cell::Wall);
            assert_eq!(field.cell(11, y), Cell::Wall);
        }
        for x in 0..=11 {
            assert_eq!(field.cell(x, 20), Cell::Wall);
        }
        for y in 0..20 {
            for x in 1..=10 {
                assert_eq!(field.cell(x, y), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_is_blocked_bounds() {
        let field = Field::new(10, 20);
        assert!(field.is_blocked(0, 5));
        assert!(field.is_blocked(11, 5));
        assert!(field.is_blocked(5, 20));
        assert!(field.is_blocked(-1, 5));
        assert!(field.is_blocked(12, 5));
        assert!(field.is_blocked(5, -1));
        assert!(field.is_blocked(5, 21));
        assert!(!field.is_blocked(1, 0));
        assert!(!field.is_blocked(10, 19));
    }

    #[test]
    fn test_write_marks_cell() {
        let mut field = Field::new(10, 20);
        field.write(3, 7, BlockId::new(9));
        assert!(field.is_blocked(3, 7));
        assert_eq!(field.cell(3, 7).block(), Some(BlockId::new(9)));
        assert_eq!(field.blocks(), vec![(Position::new(3, 7), BlockId::new(9))]);
        assert!(field.any_blocked(&[Position::new(1, 1), Position::new(3, 7)]));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_cell_out_of_bounds_panics() {
        let field = Field::new(10, 20);
        let _ = field.cell(5, 25);
    }

    #[test]
    fn test_compact_empty_field_is_noop() {
        let mut field = Field::new(10, 20);
        let before = field.clone();
        assert_eq!(field.clear_and_compact(), 0);
        assert_eq!(field, before);
    }

    #[test]
    fn test_compact_without_full_rows_is_noop() {
        let mut field = Field::new(10, 20);
        fill_row(&mut field, 19, &[5]);
        field.write(2, 10, BlockId::new(1));
        let before = field.clone();
        assert_eq!(field.clear_and_compact(), 0);
        assert_eq!(field, before);
    }

    #[test]
    fn test_single_row_clear_shifts_rows_above() {
        let mut field = Field::new(10, 20);
        fill_row(&mut field, 18, &[]);
        fill_row(&mut field, 19, &[1]);
        field.write(4, 17, BlockId::new(1));
        field.write(4, 10, BlockId::new(2));

        assert_eq!(field.clear_and_compact(), 1);

        // Row below the cleared one is untouched
        assert_eq!(field.cell(1, 19), Cell::Empty);
        assert_eq!(field.cell(2, 19).block(), Some(filler_id(2, 19)));
        // Everything above moved down exactly one row
        assert_eq!(field.cell(4, 18).block(), Some(BlockId::new(1)));
        assert_eq!(field.cell(4, 11).block(), Some(BlockId::new(2)));
        assert_eq!(field.cell(4, 17), Cell::Empty);
        assert_eq!(field.cell(4, 10), Cell::Empty);
        assert_eq!(field.blocks().len(), 9 + 2);
    }

    #[test]
    fn test_split_clears_drop_by_rows_below() {
        let mut field = Field::new(10, 20);
        fill_row(&mut field, 19, &[]);
        field.write(3, 18, BlockId::new(1));
        fill_row(&mut field, 17, &[]);
        field.write(6, 16, BlockId::new(2));

        assert_eq!(field.clear_and_compact(), 2);

        assert_eq!(field.cell(3, 19).block(), Some(BlockId::new(1)));
        assert_eq!(field.cell(6, 18).block(), Some(BlockId::new(2)));
        assert_eq!(field.blocks().len(), 2);
    }

    #[test]
    fn test_full_top_row_is_discarded() {
        let mut field = Field::new(10, 20);
        fill_row(&mut field, 0, &[]);
        assert_eq!(field.clear_and_compact(), 1);
        assert!(field.blocks().is_empty());
    }

    #[test]
    fn test_walls_survive_compaction() {
        let mut field = Field::new(10, 20);
        for y in 16..20 {
            fill_row(&mut field, y, &[]);
        }
        assert_eq!(field.clear_and_compact(), 4);
        assert_eq!(field, Field::new(10, 20));
    }

    #[test]
    fn test_clear_resets_interior() {
        let mut field = Field::new(10, 20);
        fill_row(&mut field, 12, &[3]);
        field.clear();
        assert_eq!(field, Field::new(10, 20));
    }
}
