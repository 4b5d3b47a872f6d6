use super::schema::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct City {
    pub zip_code: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Brewery {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub zip_code: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Beer {
    pub id: i32,
    pub name: String,
    pub abv: f64,
    pub a_spr: i32,
    pub a_sum: i32,
    pub a_fal: i32,
    pub a_win: i32,
    pub brewery_id: i32,
}

impl Beer {
    pub fn availability(&self) -> Availability {
        Availability::from_flags(self.a_spr, self.a_sum, self.a_fal, self.a_win)
    }
}

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Style {
    pub id: i32,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Rating {
    pub id: i32,
    pub beer_id: i32,
    pub rating: f64,
}

#[derive(Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub beer_id: i32,
    pub rating: f64,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct RatingBody {
    pub review_id: i32,
    pub review_body: String,
}

#[derive(Insertable)]
#[diesel(table_name = ratings_body)]
pub struct NewRatingBody<'a> {
    pub review_id: i32,
    pub review_body: &'a str,
}

/// A beer row joined to the name of the brewery that makes it.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct BeerListing {
    pub id: i32,
    pub name: String,
    pub abv: f64,
    pub a_spr: i32,
    pub a_sum: i32,
    pub a_fal: i32,
    pub a_win: i32,
    pub brewery_id: i32,
    pub brewery_name: String,
}

impl BeerListing {
    pub fn availability(&self) -> Availability {
        Availability::from_flags(self.a_spr, self.a_sum, self.a_fal, self.a_win)
    }
}

/// A brewery row joined to the name of the city its zip code belongs to.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct BreweryListing {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub zip_code: i32,
    pub city_name: String,
}

/// A rating with its written review, if one was left.
#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct RatingEntry {
    pub id: i32,
    pub rating: f64,
    pub review: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// Seasonal availability decoded from a beer's four integer flags.
///
/// Any non-zero flag marks the beer as released in that season. A beer with
/// no season set at all is a limited run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    spring: bool,
    summer: bool,
    fall: bool,
    winter: bool,
}

impl Availability {
    pub fn from_flags(spring: i32, summer: i32, fall: i32, winter: i32) -> Availability {
        Availability {
            spring: spring != 0,
            summer: summer != 0,
            fall: fall != 0,
            winter: winter != 0,
        }
    }

    pub fn seasons(&self) -> Vec<Season> {
        [
            (self.spring, Season::Spring),
            (self.summer, Season::Summer),
            (self.fall, Season::Fall),
            (self.winter, Season::Winter),
        ]
        .iter()
        .filter(|(available, _)| *available)
        .map(|(_, season)| *season)
        .collect()
    }

    pub fn is_limited_run(&self) -> bool {
        !(self.spring || self.summer || self.fall || self.winter)
    }
}
