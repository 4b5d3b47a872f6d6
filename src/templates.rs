use actix_web::HttpResponse;
use askama::Template;

use super::db::{BeerDetail, BreweryDetail};
use super::error::Result;
use super::models::{BeerListing, BreweryListing};

const HTML: &str = "text/html; charset=utf-8";

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "beers.html")]
pub struct BeersPage {
    pub beers: Vec<BeerListing>,
}

#[derive(Template)]
#[template(path = "beer.html")]
pub struct BeerPage {
    pub detail: BeerDetail,
}

#[derive(Template)]
#[template(path = "breweries.html")]
pub struct BreweriesPage {
    pub breweries: Vec<BreweryListing>,
}

#[derive(Template)]
#[template(path = "brewery.html")]
pub struct BreweryPage {
    pub detail: BreweryDetail,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage;

pub fn render<T: Template>(page: &T) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().content_type(HTML).body(page.render()?))
}

/// Falls back to an empty body if the page itself fails to render, since this
/// is already the error path.
pub fn not_found_response() -> HttpResponse {
    match NotFoundPage.render() {
        Ok(body) => HttpResponse::NotFound().content_type(HTML).body(body),
        Err(e) => {
            error!("Failed to render not-found page: {}", e);
            HttpResponse::NotFound().finish()
        }
    }
}
