use actix_web::web;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use std::marker::Send;

use super::error::{Error, Result};
use super::models;
use super::rating::RatingSubmission;
use super::schema;

pub type Pool = r2d2::Pool<r2d2::ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies per-connection PRAGMAs every time the pool hands out a connection.
///
/// SQLite does not enforce foreign keys unless asked to, and concurrent rating
/// submissions should wait on a locked database instead of failing outright.
#[derive(Debug)]
struct SqlitePragmas;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str, max_size: u32) -> Result<Pool> {
    let manager = r2d2::ConnectionManager::<SqliteConnection>::new(database_url);

    Ok(r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?)
}

/// Brings the schema up to date. Tables that already exist are left untouched.
pub fn run_migrations(pool: &Pool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.batch_execute("PRAGMA journal_mode = WAL;")?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(Error::MigrationError)?;
    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}

pub trait Query {
    type Item: Send;

    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item>;
}

/// Runs `query` on a pooled connection without blocking the async executor.
pub async fn execute<T>(pool: &Pool, query: T) -> Result<T::Item>
where
    T: Query + Send + 'static,
    T::Item: 'static,
{
    let pool = pool.clone();

    web::block(move || -> Result<T::Item> {
        let mut conn = pool.get()?;
        query.execute(&mut conn)
    })
    .await?
}

/*************************************/
/** List Beers query                **/
/*************************************/

pub struct ListBeers;

impl Query for ListBeers {
    type Item = Vec<models::BeerListing>;

    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item> {
        use self::schema::beers;
        use self::schema::breweries;

        Ok(beers::table
            .inner_join(breweries::table)
            .select((
                beers::id,
                beers::name,
                beers::abv,
                beers::a_spr,
                beers::a_sum,
                beers::a_fal,
                beers::a_win,
                breweries::id,
                breweries::name,
            ))
            .load::<models::BeerListing>(conn)?)
    }
}

/*************************************/
/** List Breweries query            **/
/*************************************/

pub struct ListBreweries;

impl Query for ListBreweries {
    type Item = Vec<models::BreweryListing>;

    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item> {
        use self::schema::breweries;
        use self::schema::cities;

        Ok(breweries::table
            .inner_join(cities::table)
            .select((
                breweries::id,
                breweries::name,
                breweries::address,
                breweries::zip_code,
                cities::name,
            ))
            .load::<models::BreweryListing>(conn)?)
    }
}

/*************************************/
/** Get Beer query                  **/
/*************************************/

pub struct BeerDetail {
    pub beer: models::Beer,
    pub brewery: models::Brewery,
    pub styles: Vec<models::Style>,

    /// `None` when nobody has rated the beer yet.
    pub ratings: Option<Vec<models::RatingEntry>>,
}

#[derive(Clone)]
pub struct GetBeer {
    pub beer_id: i32,
}

impl Query for GetBeer {
    type Item = BeerDetail;

    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item> {
        use self::schema::beers;
        use self::schema::breweries;
        use self::schema::ratings;
        use self::schema::ratings_body;
        use self::schema::styles;
        use self::schema::styles_index;

        let beer = beers::table
            .find(self.beer_id)
            .first::<models::Beer>(conn)?;

        let brewery = breweries::table
            .find(beer.brewery_id)
            .first::<models::Brewery>(conn)?;

        let styles = styles_index::table
            .inner_join(styles::table)
            .filter(styles_index::beer_id.eq(self.beer_id))
            .select((styles::id, styles::style))
            .load::<models::Style>(conn)?;

        let ratings = ratings::table
            .left_join(ratings_body::table)
            .filter(ratings::beer_id.eq(self.beer_id))
            .select((
                ratings::id,
                ratings::rating,
                ratings_body::review_body.nullable(),
            ))
            .order(ratings::id.asc())
            .load::<models::RatingEntry>(conn)?;

        Ok(BeerDetail {
            beer,
            brewery,
            styles,
            ratings: if ratings.is_empty() {
                None
            } else {
                Some(ratings)
            },
        })
    }
}

/*************************************/
/** Get Brewery query               **/
/*************************************/

pub struct BreweryDetail {
    pub brewery: models::Brewery,
    pub city: models::City,
    pub beers: Vec<models::Beer>,
}

#[derive(Clone)]
pub struct GetBrewery {
    pub brewery_id: i32,
}

impl Query for GetBrewery {
    type Item = BreweryDetail;

    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item> {
        use self::schema::beers;
        use self::schema::breweries;
        use self::schema::cities;

        let brewery = breweries::table
            .find(self.brewery_id)
            .first::<models::Brewery>(conn)?;

        let city = cities::table
            .find(brewery.zip_code)
            .first::<models::City>(conn)?;

        let beers = beers::table
            .filter(beers::brewery_id.eq(self.brewery_id))
            .load::<models::Beer>(conn)?;

        Ok(BreweryDetail {
            brewery,
            city,
            beers,
        })
    }
}

/*************************************/
/** Create Rating message           **/
/*************************************/

pub struct CreateRating {
    pub beer_id: i32,
    pub submission: RatingSubmission,
}

impl Query for CreateRating {
    type Item = models::Rating;

    /// Stores the rating and, if one was written, its review. Both rows are
    /// committed together or not at all.
    ///
    /// The write lock is taken up front so a concurrent submission waits on
    /// `busy_timeout` instead of failing a deferred lock upgrade.
    fn execute(&self, conn: &mut SqliteConnection) -> Result<Self::Item> {
        use self::schema::beers;
        use self::schema::ratings;
        use self::schema::ratings_body;

        conn.immediate_transaction::<_, Error, _>(|conn| {
            beers::table
                .find(self.beer_id)
                .select(beers::id)
                .first::<i32>(conn)?;

            let new_rating = models::NewRating {
                beer_id: self.beer_id,
                rating: self.submission.rating as f64,
            };

            let rating = diesel::insert_into(ratings::table)
                .values(&new_rating)
                .get_result::<models::Rating>(conn)?;

            if let Some(review) = &self.submission.review {
                let new_body = models::NewRatingBody {
                    review_id: rating.id,
                    review_body: review,
                };

                diesel::insert_into(ratings_body::table)
                    .values(&new_body)
                    .execute(conn)?;
            }

            Ok(rating)
        })
    }
}
