use directories::ProjectDirs;

pub const DEFAULT_BASE_URL: &str = "https://s.ee/api/v1/";

pub struct Env {
    pub base_url: String,
    pub api_key: Option<String>,
    pub database_path: String,
    pub request_timeout: u64,
}

impl Env {
    fn new() -> Self {
        let base_url =
            std::env::var("SEE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = std::env::var("SEE_API_KEY").ok().filter(|key| !key.is_empty());

        let database_path =
            std::env::var("SEE_DATABASE_PATH").unwrap_or_else(|_| default_database_path());

        let request_timeout = std::env::var("SEE_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .expect("SEE_REQUEST_TIMEOUT must be a valid u64 integer");

        Env { base_url, api_key, database_path, request_timeout }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

fn default_database_path() -> String {
    ProjectDirs::from("", "", "see")
        .map(|dirs| dirs.data_dir().join("see.db").to_string_lossy().into_owned())
        .unwrap_or_else(|| "see.db".to_string())
}
