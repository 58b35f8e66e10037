diesel::table! {
    wagers (id) {
        id -> Text,
        sport -> Text,
        wager_date -> Text,
        away_team -> Text,
        home_team -> Text,
        scheduled_at -> Nullable<Text>,
        market -> Text,
        pick -> Text,
        odds -> Integer,
        units -> Text,
        prediction -> Text,
        away_score -> Nullable<Integer>,
        home_score -> Nullable<Integer>,
        winner -> Nullable<Text>,
        winner_team -> Nullable<Text>,
        outcome -> Nullable<Text>,
        profit -> Nullable<Text>,
        fetched -> Integer,
        fetched_at -> Nullable<Text>,
        result_source -> Nullable<Text>,
        status -> Text,
        recorded_at -> Text,
        graded_at -> Nullable<Text>,
        initial_odds -> Integer,
        initial_ev -> Text,
    }
}
