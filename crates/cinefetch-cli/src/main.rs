//! cinefetch - movie metadata lookup CLI.

/// Application configuration (TOML).
mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{
    AppConfig, OMDB_KEYS_ENV, OmdbConfig, TMDB_KEYS_ENV, TmdbConfig, resolve_config_path,
};
use cinefetch_api::MovieRecord;
use cinefetch_api::accidents::search_accidents;
use cinefetch_api::omdb::{
    OmdbClient, OmdbProvider, fetch_with_fallback, movie_details, search_page, top_rated,
};
use cinefetch_api::tmdb::{
    ListParams, MovieList, SearchMovieParams, TmdbClient, TmdbProvider, movie_list,
    search_movies,
};
use cinefetch_db::{
    MovieDoc, TeacherDoc, add_movie, add_movies, add_teacher, open_db,
    search_movies as search_saved_movies, search_teachers,
};

/// User-Agent sent to the movie APIs.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// CLI argument parser.
#[derive(Parser)]
#[command(name = "cinefetch", about, version)]
struct Cli {
    /// Override config/data directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Query the OMDb API (falls back to bundled movies when every key fails).
    Omdb(OmdbCommand),
    /// Query the TMDB API.
    Tmdb(TmdbCommand),
    /// Saved movies and teachers.
    Db(DbCommand),
    /// Config file operations.
    Config(ConfigCommand),
    /// Search the bundled Taichung accident hotspots.
    Accidents(KeywordArgs),
    /// Print a shell completion script.
    Completions(CompletionsArgs),
}

// --- omdb ---

/// Arguments for the `omdb` subcommand.
#[derive(clap::Args)]
struct OmdbCommand {
    /// OMDb subcommand to run.
    #[command(subcommand)]
    command: OmdbSubcommands,
}

/// Available OMDb subcommands.
#[derive(Subcommand)]
enum OmdbSubcommands {
    /// Search movies with details (never fails; uses local data on errors).
    Search(OmdbSearchArgs),
    /// Fetch one page of search results without details.
    Page(OmdbPageArgs),
    /// Fetch full details for an IMDb ID.
    Details(OmdbDetailsArgs),
    /// List the curated top-rated movies.
    Top,
}

/// Arguments for the `omdb search` subcommand.
#[derive(clap::Args)]
struct OmdbSearchArgs {
    /// Title keyword (e.g. "godfather").
    #[arg(long, required = true)]
    query: String,
    /// Save the results to the local database.
    #[arg(long)]
    save: bool,
}

/// Arguments for the `omdb page` subcommand.
#[derive(clap::Args)]
struct OmdbPageArgs {
    /// Title keyword.
    #[arg(long, required = true)]
    query: String,
    /// Page number (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `omdb details` subcommand.
#[derive(clap::Args)]
struct OmdbDetailsArgs {
    /// IMDb ID (e.g. "tt0068646").
    #[arg(long, required = true)]
    id: String,
}

// --- tmdb ---

/// Arguments for the `tmdb` subcommand.
#[derive(clap::Args)]
struct TmdbCommand {
    /// TMDB subcommand to run.
    #[command(subcommand)]
    command: TmdbSubcommands,
}

/// Available TMDB subcommands.
#[derive(Subcommand)]
enum TmdbSubcommands {
    /// This week's trending movies.
    Trending(TmdbListArgs),
    /// Popular movies.
    Popular(TmdbListArgs),
    /// Upcoming releases.
    Upcoming(TmdbListArgs),
    /// Search movies (retries without locale when nothing is found).
    Search(TmdbSearchArgs),
    /// Movie details with director.
    Details(TmdbDetailsArgs),
}

/// Locale options shared by TMDB subcommands.
#[derive(clap::Args)]
struct LocaleArgs {
    /// Response language (default: config `[tmdb] language`).
    #[arg(long)]
    language: Option<String>,
    /// Region filter (default: config `[tmdb] region`).
    #[arg(long)]
    region: Option<String>,
}

/// Arguments for the TMDB list subcommands.
#[derive(clap::Args)]
struct TmdbListArgs {
    /// Locale options.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Result page.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `tmdb search` subcommand.
#[derive(clap::Args)]
struct TmdbSearchArgs {
    /// Search query (e.g. "鬥陣俱樂部").
    #[arg(long, required = true)]
    query: String,
    /// Locale options.
    #[command(flatten)]
    locale: LocaleArgs,
    /// Filter by year.
    #[arg(long)]
    year: Option<u32>,
}

/// Arguments for the `tmdb details` subcommand.
#[derive(clap::Args)]
struct TmdbDetailsArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Response language (default: config `[tmdb] language`).
    #[arg(long)]
    language: Option<String>,
}

// --- db ---

/// Arguments for the `db` subcommand.
#[derive(clap::Args)]
struct DbCommand {
    /// Db subcommand to run.
    #[command(subcommand)]
    command: DbSubcommands,
}

/// Available database subcommands.
#[derive(Subcommand)]
enum DbSubcommands {
    /// Save a movie.
    AddMovie(AddMovieArgs),
    /// List saved movies, optionally by title/director prefix.
    Movies(KeywordArgs),
    /// Save a teacher.
    AddTeacher(AddTeacherArgs),
    /// List teachers, optionally by name/department/position prefix.
    Teachers(KeywordArgs),
}

/// Arguments for the `db add-movie` subcommand.
#[derive(clap::Args)]
struct AddMovieArgs {
    /// Title.
    #[arg(long, required = true)]
    title: String,
    /// Director.
    #[arg(long)]
    director: Option<String>,
    /// Release year.
    #[arg(long)]
    year: Option<String>,
    /// IMDb ID.
    #[arg(long)]
    imdb_id: Option<String>,
}

/// Arguments for the `db add-teacher` subcommand.
#[derive(clap::Args)]
struct AddTeacherArgs {
    /// Full name.
    #[arg(long, required = true)]
    name: String,
    /// Department.
    #[arg(long, required = true)]
    department: String,
    /// Position.
    #[arg(long, required = true)]
    position: String,
}

/// Prefix filter for the listing subcommands.
#[derive(clap::Args)]
struct KeywordArgs {
    /// Prefix keyword (case-sensitive). Lists everything when omitted.
    #[arg(long, default_value = "")]
    keyword: String,
}

// --- config / completions ---

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write a config file with default settings if none exists.
    Init,
    /// Show the config file path and key counts.
    Show,
}

/// Arguments for the `completions` subcommand.
#[derive(clap::Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: Shell,
}

/// Loads the config file and applies environment overrides.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
fn load_config(dir: Option<&Path>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
}

/// Builds an `OmdbClient` from the `[omdb]` section.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client fails to build.
fn build_omdb_client(config: &OmdbConfig) -> Result<OmdbClient> {
    if config.api_keys.is_empty() {
        bail!(
            "OMDb API keys are required: set [omdb] api_keys in config.toml or {}",
            OMDB_KEYS_ENV
        );
    }

    let mut builder = OmdbClient::builder(OmdbProvider)
        .credentials(config.api_keys.iter().cloned())
        .user_agent(USER_AGENT)
        .timeout(config.timeout());
    if let Some(ref base_url) = config.base_url {
        builder = builder.base_url(
            base_url
                .parse()
                .with_context(|| format!("invalid OMDb base URL: {base_url}"))?,
        );
    }
    builder.build().context("failed to build OMDb client")
}

/// Builds a `TmdbClient` from the `[tmdb]` section.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client fails to build.
fn build_tmdb_client(config: &TmdbConfig) -> Result<TmdbClient> {
    if config.api_keys.is_empty() {
        bail!(
            "TMDB API keys are required: set [tmdb] api_keys in config.toml or {}",
            TMDB_KEYS_ENV
        );
    }

    let mut builder = TmdbClient::builder(TmdbProvider)
        .credentials(config.api_keys.iter().cloned())
        .user_agent(USER_AGENT)
        .timeout(config.timeout());
    if let Some(ref base_url) = config.base_url {
        builder = builder.base_url(
            base_url
                .parse()
                .with_context(|| format!("invalid TMDB base URL: {base_url}"))?,
        );
    }
    builder.build().context("failed to build TMDB client")
}

/// Logs a movie table.
fn print_movies(movies: &[MovieRecord]) {
    tracing::info!("ID\t\t\tYear\t\tTitle\t\t\tDirector");
    for movie in movies {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            movie.id,
            movie.year.as_deref().unwrap_or("-"),
            movie.title,
            movie.director.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Total: {} movies", movies.len());
}

/// Logs every populated field of one movie.
fn print_movie_details(movie: &MovieRecord) {
    let fields = [
        ("ID", Some(movie.id.as_str())),
        ("Title", Some(movie.title.as_str())),
        ("IMDb", movie.imdb_id.as_deref()),
        ("Year", movie.year.as_deref()),
        ("Director", movie.director.as_deref()),
        ("Actors", movie.actors.as_deref()),
        ("Genre", movie.genre.as_deref()),
        ("Runtime", movie.runtime.as_deref()),
        ("Language", movie.language.as_deref()),
        ("Country", movie.country.as_deref()),
        ("Rating", movie.rating.as_deref()),
        ("Metascore", movie.metascore.as_deref()),
        ("BoxOffice", movie.box_office.as_deref()),
        ("Awards", movie.awards.as_deref()),
        ("Poster", movie.poster_url.as_deref()),
        ("URL", movie.detail_url.as_deref()),
        ("Plot", movie.plot.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            tracing::info!("{label}:\t{value}");
        }
    }
    if let Some(tmdb_id) = movie.tmdb_id {
        tracing::info!("TMDB:\t{tmdb_id}");
    }
}

/// Converts a fetched movie into a storable document.
fn to_movie_doc(movie: &MovieRecord) -> MovieDoc {
    MovieDoc {
        id: String::new(),
        title: movie.title.clone(),
        director: movie.director.clone(),
        year: movie.year.clone(),
        imdb_id: movie.imdb_id.clone(),
        tmdb_id: movie.tmdb_id,
        plot: movie.plot.clone(),
        poster_url: movie.poster_url.clone(),
        detail_url: movie.detail_url.clone(),
        rating: movie.rating.clone(),
        genre: movie.genre.clone(),
    }
}

/// Runs the `omdb search` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or saving fails.
#[instrument(skip_all)]
async fn run_omdb_search(args: &OmdbSearchArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_omdb_client(&config.omdb)?;

    let movies = fetch_with_fallback(&client, &args.query).await;
    print_movies(&movies);

    if args.save {
        let conn = open_db(dir).context("failed to open database")?;
        let docs: Vec<MovieDoc> = movies.iter().map(to_movie_doc).collect();
        let ids = add_movies(&conn, &docs).context("failed to save search results")?;
        tracing::info!("Saved {} movie(s)", ids.len());
    }

    Ok(())
}

/// Runs the `omdb page` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or every API key fails.
#[instrument(skip_all)]
async fn run_omdb_page(args: &OmdbPageArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_omdb_client(&config.omdb)?;

    let page = search_page(&client, &args.query, args.page).await?;
    tracing::info!("Page {} ({} results in total)", page.page, page.total_results);
    print_movies(&page.movies);

    Ok(())
}

/// Runs the `omdb details` subcommand.
///
/// # Errors
///
/// Returns an error if the ID is unknown or every API key fails.
#[instrument(skip_all)]
async fn run_omdb_details(args: &OmdbDetailsArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_omdb_client(&config.omdb)?;

    let movie = movie_details(&client, &args.id).await?;
    print_movie_details(&movie);

    Ok(())
}

/// Runs the `omdb top` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built.
#[instrument(skip_all)]
async fn run_omdb_top(dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_omdb_client(&config.omdb)?;

    let movies = top_rated(&client).await;
    print_movies(&movies);

    Ok(())
}

/// Resolves list parameters against the config defaults.
fn list_params(args: &TmdbListArgs, config: &TmdbConfig) -> ListParams {
    ListParams::new()
        .language(args.locale.language.as_deref().unwrap_or(&config.language))
        .region(args.locale.region.as_deref().unwrap_or(&config.region))
        .page(args.page)
}

/// Runs the `tmdb trending|popular|upcoming` subcommands.
///
/// # Errors
///
/// Returns an error if the client cannot be built or every API key fails.
#[instrument(skip_all)]
async fn run_tmdb_list(list: MovieList, args: &TmdbListArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let movies = movie_list(&client, list, &list_params(args, &config.tmdb)).await?;
    print_movies(&movies);

    Ok(())
}

/// Runs the `tmdb search` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or every API key fails.
#[instrument(skip_all)]
async fn run_tmdb_search(args: &TmdbSearchArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let mut params = SearchMovieParams::new(&args.query)
        .language(args.locale.language.as_deref().unwrap_or(&config.tmdb.language))
        .region(args.locale.region.as_deref().unwrap_or(&config.tmdb.region));
    if let Some(year) = args.year {
        params = params.year(year);
    }

    let movies = search_movies(&client, &params).await?;
    print_movies(&movies);

    Ok(())
}

/// Runs the `tmdb details` subcommand.
///
/// # Errors
///
/// Returns an error if the movie is unknown or every API key fails.
#[instrument(skip_all)]
async fn run_tmdb_details(args: &TmdbDetailsArgs, dir: Option<&Path>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_tmdb_client(&config.tmdb)?;

    let language = args.language.as_deref().unwrap_or(&config.tmdb.language);
    let movie = cinefetch_api::tmdb::movie_details(&client, args.id, Some(language)).await?;
    print_movie_details(&movie);

    Ok(())
}

/// Runs the `db add-movie` subcommand.
///
/// # Errors
///
/// Returns an error if DB operations fail.
#[instrument(skip_all)]
fn run_db_add_movie(args: &AddMovieArgs, dir: Option<&Path>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;
    let doc = MovieDoc {
        title: args.title.clone(),
        director: args.director.clone(),
        year: args.year.clone(),
        imdb_id: args.imdb_id.clone(),
        ..MovieDoc::default()
    };
    let id = add_movie(&conn, &doc)?;
    tracing::info!("Saved movie {} as {}", doc.title, id);
    Ok(())
}

/// Runs the `db movies` subcommand.
///
/// # Errors
///
/// Returns an error if DB operations fail.
#[instrument(skip_all)]
fn run_db_movies(args: &KeywordArgs, dir: Option<&Path>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;
    let movies = search_saved_movies(&conn, &args.keyword)?;

    if movies.is_empty() {
        tracing::info!("No saved movies found.");
        return Ok(());
    }

    tracing::info!("ID\tYear\tTitle\t\t\tDirector");
    for movie in &movies {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            movie.id,
            movie.year.as_deref().unwrap_or("-"),
            movie.title,
            movie.director.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Total: {} movies", movies.len());
    Ok(())
}

/// Runs the `db add-teacher` subcommand.
///
/// # Errors
///
/// Returns an error if DB operations fail.
#[instrument(skip_all)]
fn run_db_add_teacher(args: &AddTeacherArgs, dir: Option<&Path>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;
    let doc = TeacherDoc::new(&args.name, &args.department, &args.position);
    let id = add_teacher(&conn, &doc)?;
    tracing::info!("Saved teacher {} as {}", doc.name, id);
    Ok(())
}

/// Runs the `db teachers` subcommand.
///
/// # Errors
///
/// Returns an error if DB operations fail.
#[instrument(skip_all)]
fn run_db_teachers(args: &KeywordArgs, dir: Option<&Path>) -> Result<()> {
    let conn = open_db(dir).context("failed to open database")?;
    let teachers = search_teachers(&conn, &args.keyword)?;

    if teachers.is_empty() {
        tracing::info!("No teachers found.");
        return Ok(());
    }

    tracing::info!("ID\tName\tDepartment\tPosition");
    for teacher in &teachers {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            teacher.id,
            teacher.name,
            teacher.department,
            teacher.position
        );
    }
    tracing::info!("Total: {} teachers", teachers.len());
    Ok(())
}

/// Runs the `config init` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
#[instrument(skip_all)]
fn run_config_init(dir: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() {
        tracing::info!("Config already exists: {}", config_path.display());
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .context("failed to save config")?;
    tracing::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Runs the `config show` subcommand.
///
/// Key values are never printed, only their count.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded.
#[instrument(skip_all)]
fn run_config_show(dir: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = load_config(dir)?;

    tracing::info!("Config file: {}", config_path.display());
    tracing::info!(
        "OMDb: {} key(s), timeout {}s",
        config.omdb.api_keys.len(),
        config.omdb.timeout().as_secs()
    );
    tracing::info!(
        "TMDB: {} key(s), timeout {}s, language {}, region {}",
        config.tmdb.api_keys.len(),
        config.tmdb.timeout().as_secs(),
        config.tmdb.language,
        config.tmdb.region
    );
    Ok(())
}

/// Runs the `accidents` subcommand.
#[instrument(skip_all)]
fn run_accidents(args: &KeywordArgs) {
    let spots = search_accidents(&args.keyword);
    if spots.is_empty() {
        tracing::info!("No accident hotspots found.");
        return;
    }

    tracing::info!("ID\tCount\tSeverity\tLocation\t\tCause");
    for spot in &spots {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            spot.id,
            spot.count,
            spot.severity,
            spot.location,
            spot.cause
        );
    }
    tracing::info!("Total: {} hotspots", spots.len());
}

/// Writes a completion script for `shell` to stdout.
fn run_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "cinefetch", &mut std::io::stdout());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_deref();
    match cli.command {
        Commands::Omdb(omdb) => match omdb.command {
            OmdbSubcommands::Search(args) => run_omdb_search(&args, dir).await,
            OmdbSubcommands::Page(args) => run_omdb_page(&args, dir).await,
            OmdbSubcommands::Details(args) => run_omdb_details(&args, dir).await,
            OmdbSubcommands::Top => run_omdb_top(dir).await,
        },
        Commands::Tmdb(tmdb) => match tmdb.command {
            TmdbSubcommands::Trending(args) => run_tmdb_list(MovieList::Trending, &args, dir).await,
            TmdbSubcommands::Popular(args) => run_tmdb_list(MovieList::Popular, &args, dir).await,
            TmdbSubcommands::Upcoming(args) => run_tmdb_list(MovieList::Upcoming, &args, dir).await,
            TmdbSubcommands::Search(args) => run_tmdb_search(&args, dir).await,
            TmdbSubcommands::Details(args) => run_tmdb_details(&args, dir).await,
        },
        Commands::Db(db) => match db.command {
            DbSubcommands::AddMovie(args) => run_db_add_movie(&args, dir),
            DbSubcommands::Movies(args) => run_db_movies(&args, dir),
            DbSubcommands::AddTeacher(args) => run_db_add_teacher(&args, dir),
            DbSubcommands::Teachers(args) => run_db_teachers(&args, dir),
        },
        Commands::Config(cfg) => match cfg.command {
            ConfigSubcommands::Init => run_config_init(dir),
            ConfigSubcommands::Show => run_config_show(dir),
        },
        Commands::Accidents(args) => {
            run_accidents(&args);
            Ok(())
        }
        Commands::Completions(args) => {
            run_completions(&args);
            Ok(())
        }
    }
}
