#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::Time;
    use crate::app::App;
    use crate::components::{BlockId, InputEvent, MoveDirection, PieceType, Position};
    use crate::piece::Piece;
    use crate::session::SessionController;
    use crate::tests::test_utils::{create_test_app, fill_row};

    #[test]
    fn test_app_new() {
        let app = App::default();
        assert!(!app.should_quit);
        assert!(app.session().is_paused());
        assert_eq!(app.session().field().width(), 10);
    }

    #[test]
    fn test_inputs_apply_on_tick() {
        let mut app = create_test_app();
        app.world
            .resource_mut::<SessionController>()
            .set_piece(Piece::new(PieceType::T, Position::new(4, 5)));

        app.push_input(InputEvent::Move(MoveDirection::Right));
        assert_eq!(app.session().piece().anchor(), Position::new(4, 5));

        app.on_tick();
        assert_eq!(app.session().piece().anchor(), Position::new(5, 5));
    }

    #[test]
    fn test_gravity_runs_on_manual_clock() {
        let mut app = create_test_app();
        let start = app.session().piece().anchor();

        app.on_tick();
        assert_eq!(app.session().piece().anchor(), start);

        app.world
            .resource_mut::<Time>()
            .advance(Duration::from_millis(4001));
        app.on_tick();
        assert_eq!(app.session().piece().anchor(), start.offset(0, 1));
    }

    #[test]
    fn test_locked_blocks_keep_their_kind() {
        let mut app = create_test_app();
        let kind = app.session().piece().kind();

        for _ in 0..30 {
            app.push_input(InputEvent::Move(MoveDirection::Down));
            app.on_tick();
            if !app.session().field().blocks().is_empty() {
                break;
            }
        }

        let locked = app.session().field().blocks();
        assert_eq!(locked.len(), 4);
        for (_, id) in &locked {
            assert_eq!(app.block_kind(*id), Some(kind));
        }

        let rendered = app.get_render_blocks();
        assert!(rendered.len() >= 4 + 2);
        assert_eq!(
            rendered
                .iter()
                .filter(|(position, _)| position.y == 19 || position.y == 18)
                .count(),
            4
        );
    }

    #[test]
    fn test_palette_drops_cleared_blocks() {
        let mut app = create_test_app();

        {
            let mut session = app.world.resource_mut::<SessionController>();
            session.set_piece(Piece::new(PieceType::O, Position::new(9, 19)));
            session.lock();
        }
        app.on_tick();
        for id in 0..4 {
            assert_eq!(app.block_kind(BlockId::new(id)), Some(PieceType::O));
        }

        {
            let mut session = app.world.resource_mut::<SessionController>();
            fill_row(session.field_mut(), 19, &[4, 5, 6, 7, 9, 10]);
            session.set_piece(Piece::new(PieceType::I, Position::new(4, 19)));
            assert_eq!(session.lock(), 1);
        }
        app.on_tick();

        // Only the O's upper half survived the clear
        assert_eq!(app.block_kind(BlockId::new(0)), None);
        assert_eq!(app.block_kind(BlockId::new(1)), None);
        assert_eq!(app.block_kind(BlockId::new(2)), Some(PieceType::O));
        assert_eq!(app.block_kind(BlockId::new(3)), Some(PieceType::O));
        for id in 4..8 {
            assert_eq!(app.block_kind(BlockId::new(id)), None);
        }
    }

    #[test]
    fn test_reset_rebuilds_world() {
        let mut app = create_test_app();
        app.push_input(InputEvent::Move(MoveDirection::Down));
        app.on_tick();
        app.world
            .resource_mut::<Time>()
            .advance(Duration::from_secs(3));

        app.reset();

        assert_eq!(app.world.resource::<Time>().elapsed(), Duration::ZERO);
        assert!(app.world.resource::<Time>().is_manual());
        assert_eq!(app.session().piece().anchor().y, 0);
        assert_eq!(app.session().lines_cleared(), 0);
    }
}
