use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Kind of catalog content a list entry points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    #[serde(rename = "tvshow")]
    TvShow,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::TvShow => "tvshow",
        }
    }

    /// Parses the wire spelling (`movie` or `tvshow`)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "movie" => Some(ContentType::Movie),
            "tvshow" => Some(ContentType::TvShow),
            _ => None,
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
}

/// A movie as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genres: Vec<Genre>,
    pub release_date: DateTime<Utc>,
    pub director: String,
    pub actors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub episode_number: u32,
    pub season_number: u32,
    pub release_date: DateTime<Utc>,
    pub director: String,
    pub actors: Vec<String>,
}

/// A TV show as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TvShow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub genres: Vec<Genre>,
    pub episodes: Vec<Episode>,
}

/// Catalog detail attached to a list item, serialized without a tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Content {
    Movie(Movie),
    Show(TvShow),
}

impl Content {
    pub fn id(&self) -> &str {
        match self {
            Content::Movie(movie) => &movie.id,
            Content::Show(show) => &show.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Content::Movie(movie) => &movie.title,
            Content::Show(show) => &show.title,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Movie(_) => ContentType::Movie,
            Content::Show(_) => ContentType::TvShow,
        }
    }
}
