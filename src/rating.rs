//! Validation of rating submissions posted from the beer page.
//!
//! Submissions are checked server-side whatever the browser already checked.
//! A submission that does not pass is rejected as a whole: nothing is stored
//! and the caller re-renders the page as if nothing had been posted.

pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 10;
pub const MAX_REVIEW_LENGTH: usize = 1024;

/// Form fields posted to `/beer/{beer_id}`.
#[derive(Debug, Default, Deserialize)]
pub struct RatingForm {
    #[serde(rename = "Beer_Rating")]
    pub rating: Option<String>,

    #[serde(rename = "Beer_Review")]
    pub review: Option<String>,
}

/// A rating that passed validation and may be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSubmission {
    pub rating: i64,

    /// The written review; `None` when the reviewer left it empty.
    pub review: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum Rejection {
    #[display(fmt = "rating {:?} is not an integer", _0)]
    Unparseable(String),

    #[display(fmt = "rating {} is outside {}..={}", _0, MIN_RATING, MAX_RATING)]
    OutOfRange(i64),

    #[display(fmt = "review is {} characters long, limit is {}", _0, MAX_REVIEW_LENGTH)]
    ReviewTooLong(usize),
}

impl RatingSubmission {
    pub fn from_form(form: &RatingForm) -> Result<RatingSubmission, Rejection> {
        RatingSubmission::parse(form.rating.as_deref(), form.review.as_deref())
    }

    pub fn parse(rating: Option<&str>, review: Option<&str>) -> Result<RatingSubmission, Rejection> {
        let raw = rating.unwrap_or("");
        let rating = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| Rejection::Unparseable(raw.to_owned()))?;

        if rating < MIN_RATING || rating > MAX_RATING {
            return Err(Rejection::OutOfRange(rating));
        }

        let review = review.unwrap_or("");
        let length = review.chars().count();
        if length > MAX_REVIEW_LENGTH {
            return Err(Rejection::ReviewTooLong(length));
        }

        Ok(RatingSubmission {
            rating,
            review: if review.is_empty() {
                None
            } else {
                Some(review.to_owned())
            },
        })
    }
}
