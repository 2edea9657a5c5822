//! Command-line arguments and their mapping onto the core filter types.

use clap::{Args, Parser, Subcommand};
use freelancer_core::{JobSearch, ProjectSearch, ProjectType, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "freelancer", version, about = "Search Freelancer projects and jobs")]
pub struct Cli {
    /// Access token from https://accounts.freelancer.com/settings/develop.
    /// Prompted for on stdin when absent.
    #[arg(long, env = "FREELANCER_OAUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "FREELANCER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Whole-request timeout in seconds; 0 disables it.
    #[arg(long, env = "FREELANCER_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search active projects.
    Projects(ProjectArgs),
    /// Search the job (skill) taxonomy.
    Jobs(JobArgs),
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(long, default_value = "")]
    pub query: String,
    /// fixed or hourly; repeatable.
    #[arg(long = "project-type")]
    pub project_types: Vec<ProjectType>,
    /// Job id; repeatable.
    #[arg(long = "job")]
    pub jobs: Vec<u64>,
    #[arg(long, default_value_t = 0.0)]
    pub min_avg_price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub max_avg_price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub min_avg_hourly_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    pub max_avg_hourly_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    pub min_price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub max_price: f64,
    /// Only sent when given.
    #[arg(long)]
    pub min_hourly_rate: Option<f64>,
    /// Only sent when given.
    #[arg(long)]
    pub max_hourly_rate: Option<f64>,
    /// Country code; repeatable.
    #[arg(long = "country")]
    pub countries: Vec<String>,
    /// Language code; repeatable.
    #[arg(long = "language")]
    pub languages: Vec<String>,
    #[arg(long, default_value = "time_updated")]
    pub sort_field: String,
}

impl From<ProjectArgs> for ProjectSearch {
    fn from(args: ProjectArgs) -> Self {
        ProjectSearch {
            query: args.query,
            project_types: args.project_types,
            jobs: args.jobs,
            min_avg_price: args.min_avg_price,
            max_avg_price: args.max_avg_price,
            min_avg_hourly_rate: args.min_avg_hourly_rate,
            max_avg_hourly_rate: args.max_avg_hourly_rate,
            min_price: args.min_price,
            max_price: args.max_price,
            min_hourly_rate: args.min_hourly_rate,
            max_hourly_rate: args.max_hourly_rate,
            countries: args.countries,
            languages: args.languages,
            sort_field: args.sort_field,
        }
    }
}

#[derive(Debug, Args)]
pub struct JobArgs {
    /// Job id; repeatable.
    #[arg(long = "job")]
    pub jobs: Vec<u64>,
    /// Substring of the job name; repeatable.
    #[arg(long = "job-name")]
    pub job_names: Vec<String>,
    #[arg(long = "seo-url")]
    pub seo_urls: Vec<String>,
    #[arg(long = "seo-text")]
    pub seo_texts: Vec<String>,
    /// Category id; repeatable.
    #[arg(long = "category")]
    pub categories: Vec<u64>,
    #[arg(long)]
    pub only_local: bool,
    /// Leave SEO information out of the returned jobs.
    #[arg(long)]
    pub no_seo_details: bool,
    #[arg(long, default_value = "en")]
    pub seo_country_name: String,
    /// Accepted for compatibility; the API is always asked for English.
    #[arg(long, default_value = "en")]
    pub lang: String,
}

impl From<JobArgs> for JobSearch {
    fn from(args: JobArgs) -> Self {
        JobSearch {
            jobs: args.jobs,
            job_names: args.job_names,
            seo_urls: args.seo_urls,
            seo_texts: args.seo_texts,
            categories: args.categories,
            only_local: args.only_local,
            seo_details: !args.no_seo_details,
            seo_country_name: args.seo_country_name,
            lang: args.lang,
        }
    }
}
