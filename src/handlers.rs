use actix_web::{web, HttpResponse};

use super::db::{self, CreateRating, GetBeer, GetBrewery, ListBeers, ListBreweries, Pool};
use super::error::{Error, Result};
use super::rating::{RatingForm, RatingSubmission};
use super::templates::{self, BeerPage, BeersPage, BreweriesPage, BreweryPage, HomePage};

/// Registers every route. Unmatched paths are left to the app's default
/// service, which should be [`not_found`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|_, _| Error::NotFound.into()))
        .route("/", web::get().to(index))
        .route("/home", web::get().to(index))
        .route("/home/", web::get().to(index))
        // Without an ID, the list is shown instead.
        .route("/beers", web::get().to(beers))
        .route("/beers/", web::get().to(beers))
        .route("/beer", web::get().to(beers))
        .route("/beer/", web::get().to(beers))
        .service(
            web::resource("/beer/{beer_id}")
                .route(web::get().to(beer))
                .route(web::post().to(rate_beer)),
        )
        .route("/breweries", web::get().to(breweries))
        .route("/breweries/", web::get().to(breweries))
        .route("/brewery", web::get().to(breweries))
        .route("/brewery/", web::get().to(breweries))
        .route("/brewery/{brewery_id}", web::get().to(brewery));
}

async fn index() -> Result<HttpResponse> {
    templates::render(&HomePage)
}

async fn beers(pool: web::Data<Pool>) -> Result<HttpResponse> {
    let beers = db::execute(&pool, ListBeers).await?;

    templates::render(&BeersPage { beers })
}

async fn beer(pool: web::Data<Pool>, beer_id: web::Path<i32>) -> Result<HttpResponse> {
    render_beer(&pool, beer_id.into_inner()).await
}

/// Route handler for rating a beer.
///
/// Expects the following POST data:
///
/// - `Beer_Rating`: An integer from 0 to 10
/// - `Beer_Review`: An optional review, at most 1024 characters
///
/// Submissions that fail validation are discarded without telling the user.
/// Either way the beer page is rendered again from fresh data.
async fn rate_beer(
    pool: web::Data<Pool>,
    beer_id: web::Path<i32>,
    form: web::Form<RatingForm>,
) -> Result<HttpResponse> {
    let beer_id = beer_id.into_inner();

    match RatingSubmission::from_form(&form) {
        Ok(submission) => {
            let rating = db::execute(&pool, CreateRating { beer_id, submission }).await?;
            info!("Stored rating {} for beer {}", rating.id, beer_id);
        }
        Err(rejection) => {
            warn!("Discarded rating for beer {}: {}", beer_id, rejection);
        }
    }

    render_beer(&pool, beer_id).await
}

async fn render_beer(pool: &Pool, beer_id: i32) -> Result<HttpResponse> {
    let detail = db::execute(pool, GetBeer { beer_id }).await?;

    templates::render(&BeerPage { detail })
}

async fn breweries(pool: web::Data<Pool>) -> Result<HttpResponse> {
    let breweries = db::execute(&pool, ListBreweries).await?;

    templates::render(&BreweriesPage { breweries })
}

async fn brewery(pool: web::Data<Pool>, brewery_id: web::Path<i32>) -> Result<HttpResponse> {
    let detail = db::execute(
        &pool,
        GetBrewery {
            brewery_id: brewery_id.into_inner(),
        },
    )
    .await?;

    templates::render(&BreweryPage { detail })
}

pub async fn not_found() -> HttpResponse {
    templates::not_found_response()
}
