use diesel::connection::SimpleConnection;
use diesel::r2d2;
use diesel::SqliteConnection;
use tempfile::TempDir;

use super::db::{self, Pool};

/// A migrated database file that lives as long as the value does.
pub struct TestDb {
    _dir: TempDir,
    pub pool: Pool,
}

impl TestDb {
    pub fn new() -> TestDb {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("beers.db");

        let pool = db::create_pool(&path.to_string_lossy(), 4).expect("pool");
        db::run_migrations(&pool).expect("migrations");

        TestDb { _dir: dir, pool }
    }

    pub fn conn(&self) -> r2d2::PooledConnection<r2d2::ConnectionManager<SqliteConnection>> {
        self.pool.get().expect("connection")
    }
}

/// One city, one brewery and two beers. Beer 1 is the limited run with no
/// styles; beer 2 is a winter seasonal with two styles.
pub fn seed_catalog(conn: &mut SqliteConnection) {
    conn.batch_execute(
        "
        INSERT INTO cities (zip_code, name) VALUES (90210, 'Beverly Hills');
        INSERT INTO breweries (id, name, address, zip_code)
            VALUES (1, 'Canyon Brewing', '1 Canyon Dr', 90210);
        INSERT INTO beers (id, name, abv, a_spr, a_sum, a_fal, a_win, brewery_id)
            VALUES (1, 'Limited Lager', 5.5, 0, 0, 0, 0, 1);
        INSERT INTO beers (id, name, abv, a_spr, a_sum, a_fal, a_win, brewery_id)
            VALUES (2, 'Winter Warmer', 8.2, 0, 0, 0, 1, 1);
        INSERT INTO styles (id, style) VALUES (1, 'Old Ale');
        INSERT INTO styles (id, style) VALUES (2, 'Winter Seasonal');
        INSERT INTO styles_index (beer_id, style_id) VALUES (2, 1);
        INSERT INTO styles_index (beer_id, style_id) VALUES (2, 2);
        ",
    )
    .expect("seed catalog");
}
