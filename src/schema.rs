table! {
    beers (id) {
        id -> Integer,
        name -> Text,
        abv -> Double,
        a_spr -> Integer,
        a_sum -> Integer,
        a_fal -> Integer,
        a_win -> Integer,
        brewery_id -> Integer,
    }
}

table! {
    breweries (id) {
        id -> Integer,
        name -> Text,
        address -> Text,
        zip_code -> Integer,
    }
}

table! {
    cities (zip_code) {
        zip_code -> Integer,
        name -> Text,
    }
}

table! {
    styles (id) {
        id -> Integer,
        style -> Text,
    }
}

table! {
    styles_index (beer_id, style_id) {
        beer_id -> Integer,
        style_id -> Integer,
    }
}

table! {
    ratings (id) {
        id -> Integer,
        beer_id -> Integer,
        rating -> Double,
    }
}

table! {
    ratings_body (review_id) {
        review_id -> Integer,
        review_body -> Text,
    }
}

joinable!(beers -> breweries (brewery_id));
joinable!(breweries -> cities (zip_code));
joinable!(styles_index -> beers (beer_id));
joinable!(styles_index -> styles (style_id));
joinable!(ratings -> beers (beer_id));
joinable!(ratings_body -> ratings (review_id));

allow_tables_to_appear_in_same_query!(
    beers,
    breweries,
    cities,
    styles,
    styles_index,
    ratings,
    ratings_body,
);
