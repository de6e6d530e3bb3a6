use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Episode, Genre, Movie, TvShow};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn movie(
    id: &str,
    title: &str,
    description: &str,
    genres: Vec<Genre>,
    released: (i32, u32, u32),
    director: &str,
    actors: &[&str],
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        genres,
        release_date: date(released.0, released.1, released.2),
        director: director.to_string(),
        actors: names(actors),
    }
}

fn episode(season: u32, number: u32, aired: (i32, u32, u32), director: &str, actors: &[&str]) -> Episode {
    Episode {
        episode_number: number,
        season_number: season,
        release_date: date(aired.0, aired.1, aired.2),
        director: director.to_string(),
        actors: names(actors),
    }
}

/// Movies loaded when the catalog is seeded
pub fn demo_movies() -> Vec<Movie> {
    use Genre::*;

    vec![
        movie(
            "movie-1",
            "The Matrix",
            "A computer hacker learns about the true nature of his reality.",
            vec![Action, SciFi],
            (1999, 3, 31),
            "Wachowski Brothers",
            &["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"],
        ),
        movie(
            "movie-2",
            "Inception",
            "A thief who steals corporate secrets through dream-sharing technology.",
            vec![Action, SciFi],
            (2010, 7, 16),
            "Christopher Nolan",
            &["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Ellen Page"],
        ),
        movie(
            "movie-3",
            "The Shawshank Redemption",
            "Two imprisoned men bond over years, finding redemption through acts of decency.",
            vec![Drama],
            (1994, 9, 23),
            "Frank Darabont",
            &["Tim Robbins", "Morgan Freeman"],
        ),
        movie(
            "movie-4",
            "Pulp Fiction",
            "Various interconnected stories of Los Angeles criminals.",
            vec![Drama, Action],
            (1994, 10, 14),
            "Quentin Tarantino",
            &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
        ),
        movie(
            "movie-5",
            "The Dark Knight",
            "Batman faces the Joker, a criminal mastermind who wants to plunge Gotham into anarchy.",
            vec![Action, Drama],
            (2008, 7, 18),
            "Christopher Nolan",
            &["Christian Bale", "Heath Ledger", "Aaron Eckhart"],
        ),
        movie(
            "movie-6",
            "Forrest Gump",
            "The presidencies of Kennedy and Johnson unfold through the perspective of an Alabama man.",
            vec![Drama, Romance],
            (1994, 7, 6),
            "Robert Zemeckis",
            &["Tom Hanks", "Robin Wright", "Gary Sinise"],
        ),
        movie(
            "movie-7",
            "The Hangover",
            "Three friends wake up from a bachelor party in Las Vegas with no memory of the previous night.",
            vec![Comedy],
            (2009, 6, 5),
            "Todd Phillips",
            &["Bradley Cooper", "Ed Helms", "Zach Galifianakis"],
        ),
        movie(
            "movie-8",
            "The Conjuring",
            "Paranormal investigators work to help a family terrorized by a dark presence.",
            vec![Horror],
            (2013, 7, 19),
            "James Wan",
            &["Patrick Wilson", "Vera Farmiga", "Lili Taylor"],
        ),
    ]
}

/// TV shows loaded when the catalog is seeded
pub fn demo_shows() -> Vec<TvShow> {
    use Genre::*;

    vec![
        TvShow {
            id: "tvshow-1".to_string(),
            title: "Breaking Bad".to_string(),
            description: "A high school chemistry teacher turned methamphetamine producer."
                .to_string(),
            genres: vec![Drama, Action],
            episodes: vec![
                episode(1, 1, (2008, 1, 20), "Vince Gilligan", &["Bryan Cranston", "Aaron Paul"]),
                episode(1, 2, (2008, 1, 27), "Vince Gilligan", &["Bryan Cranston", "Aaron Paul"]),
            ],
        },
        TvShow {
            id: "tvshow-2".to_string(),
            title: "Game of Thrones".to_string(),
            description: "Nine noble families fight for control over the lands of Westeros."
                .to_string(),
            genres: vec![Fantasy, Drama, Action],
            episodes: vec![episode(
                1,
                1,
                (2011, 4, 17),
                "Tim Van Patten",
                &["Emilia Clarke", "Peter Dinklage", "Kit Harington"],
            )],
        },
        TvShow {
            id: "tvshow-3".to_string(),
            title: "Friends".to_string(),
            description:
                "Follows the personal and professional lives of six friends living in Manhattan."
                    .to_string(),
            genres: vec![Comedy, Romance],
            episodes: vec![episode(
                1,
                1,
                (1994, 9, 22),
                "James Burrows",
                &["Jennifer Aniston", "Courteney Cox", "Matthew Perry"],
            )],
        },
    ]
}
