#![warn(clippy::all, clippy::pedantic)]

// Test modules
pub mod app_tests;
pub mod field_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use crate::Time;
    use crate::app::App;
    use crate::bag::Bag;
    use crate::components::BlockId;
    use crate::config::Config;
    use crate::field::Field;
    use crate::session::SessionController;

    // Ids far above anything a session hands out
    const FILLER_ID_BASE: u32 = 10_000;

    // Standard 10x20 session with a reproducible bag
    #[must_use]
    pub fn create_test_session() -> SessionController {
        SessionController::new(10, 20, Bag::with_seed(42))
    }

    // Unpaused, seeded config so tests control every step
    #[must_use]
    pub fn create_test_config() -> Config {
        let mut config = Config::default();
        config.session.start_paused = false;
        config.session.seed = Some(7);
        config
    }

    // App on a manual clock
    #[must_use]
    pub fn create_test_app() -> App {
        App::with_time(create_test_config(), Time::manual())
    }

    // Fill interior row `y`, leaving the listed columns empty
    pub fn fill_row(field: &mut Field, y: i32, gaps: &[i32]) {
        for x in 1..=field.width() {
            if !gaps.contains(&x) {
                field.write(x, y, filler_id(x, y));
            }
        }
    }

    #[allow(clippy::cast_sign_loss)]
    #[must_use]
    pub fn filler_id(x: i32, y: i32) -> BlockId {
        BlockId::new(FILLER_ID_BASE + (y * 100 + x) as u32)
    }
}
