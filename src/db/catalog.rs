use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, PgPool};

use crate::{
    error::AppResult,
    models::{Episode, Genre, Movie, TvShow},
};

/// Read-only lookup of catalog content by id
///
/// The list service only needs existence checks and detail fetches; how the
/// catalog gets populated is outside its concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    async fn find_movie(&self, id: &str) -> AppResult<Option<Movie>>;

    async fn find_show(&self, id: &str) -> AppResult<Option<TvShow>>;
}

/// Catalog backed by the `movies` and `tvshows` tables
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: String,
    title: String,
    description: String,
    genres: Json<Vec<Genre>>,
    release_date: DateTime<Utc>,
    director: String,
    actors: Json<Vec<String>>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            description: row.description,
            genres: row.genres.0,
            release_date: row.release_date,
            director: row.director,
            actors: row.actors.0,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShowRow {
    id: String,
    title: String,
    description: String,
    genres: Json<Vec<Genre>>,
    episodes: Json<Vec<Episode>>,
}

impl From<ShowRow> for TvShow {
    fn from(row: ShowRow) -> Self {
        TvShow {
            id: row.id,
            title: row.title,
            description: row.description,
            genres: row.genres.0,
            episodes: row.episodes.0,
        }
    }
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts catalog content, leaving rows that already exist untouched
    pub async fn seed(&self, movies: &[Movie], shows: &[TvShow]) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for movie in movies {
            sqlx::query(
                "INSERT INTO movies (id, title, description, genres, release_date, director, actors) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(&movie.id)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(Json(&movie.genres))
            .bind(movie.release_date)
            .bind(&movie.director)
            .bind(Json(&movie.actors))
            .execute(&mut *tx)
            .await?;
        }

        for show in shows {
            sqlx::query(
                "INSERT INTO tvshows (id, title, description, genres, episodes) \
                 VALUES ($1, $2, $3, $4, $5) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(&show.id)
            .bind(&show.title)
            .bind(&show.description)
            .bind(Json(&show.genres))
            .bind(Json(&show.episodes))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            movies = movies.len(),
            shows = shows.len(),
            "Catalog seeded"
        );

        Ok(())
    }
}

#[async_trait]
impl ContentCatalog for PgCatalog {
    async fn find_movie(&self, id: &str) -> AppResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(
            "SELECT id, title, description, genres, release_date, director, actors \
             FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn find_show(&self, id: &str) -> AppResult<Option<TvShow>> {
        let row = sqlx::query_as::<_, ShowRow>(
            "SELECT id, title, description, genres, episodes FROM tvshows WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TvShow::from))
    }
}
