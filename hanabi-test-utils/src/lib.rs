pub mod constant;
pub mod error;
pub mod fixtures;
pub mod game;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::catalog::CatalogFixture, test_setup_with_game_tables, test_setup_with_tables,
        TestError, TestSetup,
    };
}
