//! TSV loading for actor and movie files
//!
//! Both files are tab-separated with a header row, in the layout of the
//! public IMDb datasets:
//!
//! - movies (`title.basics`): `tconst`, `titleType`, `primaryTitle`, ...
//! - actors (`name.basics`): `nconst`, `primaryName`, ...,
//!   `primaryProfession`, `knownForTitles`
//!
//! Columns are located by header name, so extra or reordered columns are
//! fine. `\N` marks an absent value.

use crate::error::{LoadError, LoadResult};
use crate::graph::{GraphBuilder, MovieGraph, NodeId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const NULL_FIELD: &str = "\\N";
const ACTOR_PROFESSIONS: [&str; 2] = ["actor", "actress"];

/// Options controlling which rows become nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// `titleType` values loaded as movies
    #[serde(default = "default_title_types")]
    pub title_types: Vec<String>,

    /// Drop actors none of whose known titles were loaded
    #[serde(default)]
    pub skip_isolated: bool,
}

fn default_title_types() -> Vec<String> {
    vec!["movie".to_string()]
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            title_types: default_title_types(),
            skip_isolated: false,
        }
    }
}

impl LoadOptions {
    pub fn with_title_types(mut self, types: Vec<String>) -> Self {
        self.title_types = types;
        self
    }

    pub fn skip_isolated(mut self) -> Self {
        self.skip_isolated = true;
        self
    }
}

/// Row counters from a load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub movie_rows: usize,
    pub movies_loaded: usize,
    pub actor_rows: usize,
    pub actors_loaded: usize,
    pub non_actors_skipped: usize,
    pub isolated_skipped: usize,
    /// `knownForTitles` entries that name no loaded movie
    pub unknown_titles: usize,
}

/// Reads actor and movie files into a [`MovieGraph`]
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
    options: LoadOptions,
}

impl GraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a graph from an actors file and a movies file
    pub fn load(&self, actors: impl AsRef<Path>, movies: impl AsRef<Path>) -> LoadResult<MovieGraph> {
        let (graph, _) = self.load_with_stats(actors, movies)?;
        Ok(graph)
    }

    /// Load a graph, also returning row counters
    pub fn load_with_stats(
        &self,
        actors: impl AsRef<Path>,
        movies: impl AsRef<Path>,
    ) -> LoadResult<(MovieGraph, LoadStats)> {
        let (actors, movies) = (actors.as_ref(), movies.as_ref());
        tracing::debug!("Loading movies from {:?}, actors from {:?}", movies, actors);

        let movies_file = open(movies)?;
        let actors_file = open(actors)?;
        self.read(actors_file, actors, movies_file, movies)
    }

    /// Load a graph from in-memory readers
    pub fn load_from_readers<A: Read, M: Read>(
        &self,
        actors: A,
        movies: M,
    ) -> LoadResult<(MovieGraph, LoadStats)> {
        self.read(actors, Path::new("<actors>"), movies, Path::new("<movies>"))
    }

    fn read<A: Read, M: Read>(
        &self,
        actors: A,
        actors_source: &Path,
        movies: M,
        movies_source: &Path,
    ) -> LoadResult<(MovieGraph, LoadStats)> {
        let mut builder = MovieGraph::builder();
        let mut stats = LoadStats::default();

        self.read_movies(movies, movies_source, &mut builder, &mut stats)?;
        self.read_actors(actors, actors_source, &mut builder, &mut stats)?;

        let graph = builder.build();
        tracing::info!(
            "Loaded {} movies and {} actors ({} links)",
            stats.movies_loaded,
            stats.actors_loaded,
            graph.edge_count()
        );
        if stats.unknown_titles > 0 {
            tracing::debug!("{} known-for titles did not match a loaded movie", stats.unknown_titles);
        }

        Ok((graph, stats))
    }

    fn read_movies<R: Read>(
        &self,
        input: R,
        source: &Path,
        builder: &mut GraphBuilder,
        stats: &mut LoadStats,
    ) -> LoadResult<()> {
        let mut reader = tsv_reader(input);
        let headers = reader.headers()?.clone();
        let key_col = column(&headers, "tconst", source)?;
        let type_col = column(&headers, "titleType", source)?;
        let title_col = column(&headers, "primaryTitle", source)?;

        for record in reader.records() {
            let record = record?;
            let line = line_of(&record);
            stats.movie_rows += 1;

            let title_type = field(&record, type_col).unwrap_or_default();
            if !self.options.title_types.iter().any(|t| t == title_type) {
                continue;
            }

            let key = required(&record, key_col, "tconst", source, line)?;
            if builder.id_for_key(key).is_some() {
                tracing::warn!("{}:{}: duplicate title key {}, skipping", source.display(), line, key);
                continue;
            }
            let title = field(&record, title_col).unwrap_or_default();

            builder
                .add_movie(key, title)
                .map_err(|source_err| invalid(source, line, source_err))?;
            stats.movies_loaded += 1;
        }

        Ok(())
    }

    fn read_actors<R: Read>(
        &self,
        input: R,
        source: &Path,
        builder: &mut GraphBuilder,
        stats: &mut LoadStats,
    ) -> LoadResult<()> {
        let mut reader = tsv_reader(input);
        let headers = reader.headers()?.clone();
        let key_col = column(&headers, "nconst", source)?;
        let name_col = column(&headers, "primaryName", source)?;
        let profession_col = column(&headers, "primaryProfession", source)?;
        let titles_col = column(&headers, "knownForTitles", source)?;

        for record in reader.records() {
            let record = record?;
            let line = line_of(&record);
            stats.actor_rows += 1;

            let is_actor = field(&record, profession_col)
                .map(|p| p.split(',').any(|p| ACTOR_PROFESSIONS.contains(&p.trim())))
                .unwrap_or(false);
            if !is_actor {
                stats.non_actors_skipped += 1;
                continue;
            }

            let key = required(&record, key_col, "nconst", source, line)?;
            let name = field(&record, name_col).unwrap_or_default();

            let movies: Vec<NodeId> = field(&record, titles_col)
                .into_iter()
                .flat_map(|titles| titles.split(','))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .filter_map(|t| {
                    let id = builder.id_for_key(t);
                    if id.is_none() {
                        stats.unknown_titles += 1;
                    }
                    id
                })
                .collect();

            if movies.is_empty() && self.options.skip_isolated {
                stats.isolated_skipped += 1;
                continue;
            }

            let actor = builder
                .add_actor(key, name)
                .map_err(|source_err| invalid(source, line, source_err))?;
            for movie in movies {
                builder.link(actor, movie);
            }
            stats.actors_loaded += 1;
        }

        Ok(())
    }
}

impl MovieGraph {
    /// Load a graph with default [`LoadOptions`]
    pub fn load(actors: impl AsRef<Path>, movies: impl AsRef<Path>) -> LoadResult<Self> {
        GraphLoader::new().load(actors, movies)
    }
}

fn open(path: &Path) -> LoadResult<File> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn tsv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .has_headers(true)
        .from_reader(input)
}

fn column(headers: &csv::StringRecord, name: &'static str, source: &Path) -> LoadResult<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn {
            path: source.to_path_buf(),
            line: 1,
            column: name,
        })
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Field value, with `\N` and blanks read as absent
fn field(record: &csv::StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != NULL_FIELD)
}

fn required<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    column: &'static str,
    source: &Path,
    line: u64,
) -> LoadResult<&'r str> {
    field(record, index).ok_or_else(|| LoadError::MissingColumn {
        path: source.to_path_buf(),
        line,
        column,
    })
}

fn invalid(source: &Path, line: u64, err: crate::limits::ValidationError) -> LoadError {
    LoadError::Invalid {
        path: PathBuf::from(source),
        line,
        source: err,
    }
}
